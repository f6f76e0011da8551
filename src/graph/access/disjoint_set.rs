//! Disjoint Set (Union-Find) used for weak connectivity.
//!
//! Path compression and union-by-rank keep both operations nearly constant
//! time.

/// A Disjoint Set (Union-Find) over the elements `0..len`.
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Finds the representative of the set containing `id`, with path compression.
    pub(crate) fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut curr = id;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// Unites the sets containing `a` and `b`.
    /// Returns `true` if they were in different sets.
    pub(crate) fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            core::cmp::Ordering::Less => self.parent[root_a] = root_b,
            core::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            core::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    /// Number of disjoint sets.
    pub(crate) fn set_count(&self) -> usize {
        self.sets
    }
}
