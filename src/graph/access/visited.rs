//! Visited flags for graph traversals.
//!
//! Algorithms keep their visited state in one of these tables and pass it by
//! reference into the traversal helpers, so a single table can span several
//! traversal roots.

/// A per-slot visited flag table, indexed by node label.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    /// Creates a table with `len` cleared slots.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        self.flags[node]
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, node: usize) {
        self.flags[node] = true;
    }

    #[inline(always)]
    pub(crate) fn unmark(&mut self, node: usize) {
        self.flags[node] = false;
    }

    /// Returns `true` iff the node was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        !core::mem::replace(&mut self.flags[node], true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_visit_marks_once() {
        let mut visited = VisitedFlags::new(3);
        assert!(visited.try_visit(2));
        assert!(!visited.try_visit(2));
        assert!(visited.is_visited(2));
        visited.unmark(2);
        assert!(!visited.is_visited(2));
        visited.mark(1);
        assert!(visited.is_visited(1));
    }
}
