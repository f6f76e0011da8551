//! Traversals and connectivity algorithms shared by every graph variant.
//!
//! Everything here works on an [`AdjacencyList`] and follows entries exactly
//! as stored, regardless of the directionality of the graph that owns them.
//! Depth-first work runs on an explicit frame stack that reproduces recursive
//! visiting order without consuming call-stack depth.

use core::ops::ControlFlow;
use std::collections::VecDeque;

use crate::graph::access::visited::VisitedFlags;
use crate::graph::{AdjacencyList, NodeId};

/// An iterator for Breadth-First Search (BFS).
///
/// This iterator yields node labels in BFS discovery order.
/// It uses an internal `VecDeque` and visited table for state management.
pub struct Bfs<'a, W> {
    adjacency: &'a AdjacencyList<W>,
    visited: VisitedFlags,
    queue: VecDeque<NodeId>,
}

impl<'a, W: Copy> Bfs<'a, W> {
    /// Creates a new BFS iterator starting from `start_node`.
    ///
    /// An invalid `start_node` yields nothing.
    pub fn new(adjacency: &'a AdjacencyList<W>, start_node: NodeId) -> Self {
        let mut visited = VisitedFlags::new(adjacency.slot_count());
        let mut queue = VecDeque::new();

        if adjacency.contains(start_node) {
            visited.mark(start_node);
            queue.push_back(start_node);
        }

        Self {
            adjacency,
            visited,
            queue,
        }
    }
}

impl<W: Copy> Iterator for Bfs<'_, W> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for edge in self.adjacency.edges_of(u) {
            if self.visited.try_visit(edge.target) {
                self.queue.push_back(edge.target);
            }
        }

        Some(u)
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// This iterator yields node labels in recursive DFS pre-order: the first
/// unvisited neighbour is explored completely before the next one is tried.
pub struct Dfs<'a, W> {
    adjacency: &'a AdjacencyList<W>,
    visited: VisitedFlags,
    /// `(node, index of the next adjacency entry to try)`
    stack: Vec<(NodeId, usize)>,
    start: Option<NodeId>,
}

impl<'a, W: Copy> Dfs<'a, W> {
    /// Creates a new DFS iterator starting from `start_node`.
    ///
    /// An invalid `start_node` yields nothing.
    pub fn new(adjacency: &'a AdjacencyList<W>, start_node: NodeId) -> Self {
        Self {
            adjacency,
            visited: VisitedFlags::new(adjacency.slot_count()),
            stack: Vec::new(),
            start: adjacency.contains(start_node).then_some(start_node),
        }
    }
}

impl<W: Copy> Iterator for Dfs<'_, W> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.visited.mark(start);
            self.stack.push((start, 0));
            return Some(start);
        }

        while let Some(frame) = self.stack.last_mut() {
            match self.adjacency.edges_of(frame.0).get(frame.1) {
                Some(edge) => {
                    frame.1 += 1;
                    let next = edge.target;
                    if self.visited.try_visit(next) {
                        self.stack.push((next, 0));
                        return Some(next);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// Events reported by [`depth_first_visit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DfsEvent {
    /// `node` was reached for the first time, through `parent` unless it is
    /// the root.
    Discover {
        node: NodeId,
        parent: Option<NodeId>,
    },
    /// An entry of `node` points at `target`, which was already visited.
    /// `parent` is the node `node` was discovered from.
    Revisit {
        node: NodeId,
        parent: Option<NodeId>,
        target: NodeId,
    },
    /// Every entry of `node` has been handled.
    Finish { node: NodeId },
}

struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    cursor: usize,
}

/// Depth-first visit from `root`, reporting [`DfsEvent`]s to `visitor`.
///
/// Nodes already marked in `visited` are not entered, which lets callers run
/// one table across several roots. Returns `Break` as soon as the visitor
/// does. A `root` that is already visited produces no events.
pub(crate) fn depth_first_visit<W, F>(
    adjacency: &AdjacencyList<W>,
    root: NodeId,
    visited: &mut VisitedFlags,
    mut visitor: F,
) -> ControlFlow<()>
where
    W: Copy,
    F: FnMut(DfsEvent) -> ControlFlow<()>,
{
    if !visited.try_visit(root) {
        return ControlFlow::Continue(());
    }
    visitor(DfsEvent::Discover {
        node: root,
        parent: None,
    })?;

    let mut stack = vec![Frame {
        node: root,
        parent: None,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        match adjacency.edges_of(node).get(frame.cursor) {
            Some(edge) => {
                frame.cursor += 1;
                let parent = frame.parent;
                let target = edge.target;
                if visited.try_visit(target) {
                    visitor(DfsEvent::Discover {
                        node: target,
                        parent: Some(node),
                    })?;
                    stack.push(Frame {
                        node: target,
                        parent: Some(node),
                        cursor: 0,
                    });
                } else {
                    visitor(DfsEvent::Revisit {
                        node,
                        parent,
                        target,
                    })?;
                }
            }
            None => {
                stack.pop();
                visitor(DfsEvent::Finish { node })?;
            }
        }
    }

    ControlFlow::Continue(())
}

/// Marks every node reachable from `root` in `visited`.
pub(crate) fn flood_fill<W: Copy>(adjacency: &AdjacencyList<W>, root: NodeId, visited: &mut VisitedFlags) {
    let mut stack = Vec::new();
    if visited.try_visit(root) {
        stack.push(root);
    }
    while let Some(u) = stack.pop() {
        for edge in adjacency.edges_of(u) {
            if visited.try_visit(edge.target) {
                stack.push(edge.target);
            }
        }
    }
}

/// Counts the flood fills needed to cover every node.
///
/// Roots are tried in ascending label order; each one not already covered by
/// an earlier flood starts a new component.
pub fn connected_component_count<W: Copy>(adjacency: &AdjacencyList<W>) -> usize {
    let mut visited = VisitedFlags::new(adjacency.slot_count());
    let mut components = 0;
    for node in adjacency.nodes() {
        if !visited.is_visited(node) {
            components += 1;
            flood_fill(adjacency, node, &mut visited);
        }
    }
    log_trace!(components, "counted connected components");
    components
}

/// Returns true if the nodes can be two-coloured along the stored entries.
///
/// Each uncoloured root gets colour 0 and every newly discovered node the
/// opposite colour of the node it was discovered from. An entry between two
/// nodes of the same colour is a conflict.
pub fn is_two_colorable<W: Copy>(adjacency: &AdjacencyList<W>) -> bool {
    let mut visited = VisitedFlags::new(adjacency.slot_count());
    let mut color = vec![false; adjacency.slot_count()];

    adjacency.nodes().all(|root| {
        depth_first_visit(adjacency, root, &mut visited, |event| match event {
            DfsEvent::Discover {
                node,
                parent: Some(parent),
            } => {
                color[node] = !color[parent];
                ControlFlow::Continue(())
            }
            DfsEvent::Revisit { node, target, .. } if color[node] == color[target] => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        })
        .is_continue()
    })
}

/// Nodes in DFS post-order, covering every root in ascending label order.
///
/// Reversing the result gives decreasing finish time.
pub(crate) fn finish_order<W: Copy>(adjacency: &AdjacencyList<W>) -> Vec<NodeId> {
    let mut visited = VisitedFlags::new(adjacency.slot_count());
    let mut order = Vec::with_capacity(adjacency.node_count());
    for root in adjacency.nodes() {
        let _ = depth_first_visit(adjacency, root, &mut visited, |event| {
            if let DfsEvent::Finish { node } = event {
                order.push(node);
            }
            ControlFlow::Continue(())
        });
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(node_count: usize, arcs: &[(NodeId, NodeId)]) -> AdjacencyList<i64> {
        let mut adjacency = AdjacencyList::new(node_count);
        for &(x, y) in arcs {
            adjacency.push_arc(x, y, 1);
            adjacency.count_edge();
        }
        adjacency
    }

    #[test]
    fn test_bfs_order() {
        // 1 -> 2,3 ; 2 -> 4 ; 3 -> 4
        let adj = adjacency(4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        assert_eq!(Bfs::new(&adj, 1).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(Bfs::new(&adj, 3).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(Bfs::new(&adj, 0).count(), 0);
    }

    #[test]
    fn test_dfs_matches_recursive_order() {
        // 1 -> 2,3 ; 2 -> 4 ; 4 -> 3
        let adj = adjacency(5, &[(1, 2), (1, 3), (2, 4), (4, 3)]);
        assert_eq!(Dfs::new(&adj, 1).collect::<Vec<_>>(), vec![1, 2, 4, 3]);
        assert_eq!(Dfs::new(&adj, 5).collect::<Vec<_>>(), vec![5]);
        assert_eq!(Dfs::new(&adj, 6).count(), 0);
    }

    #[test]
    fn test_visit_events() {
        let adj = adjacency(3, &[(1, 2), (2, 1), (2, 3)]);
        let mut visited = VisitedFlags::new(adj.slot_count());
        let mut events = Vec::new();
        let flow = depth_first_visit(&adj, 1, &mut visited, |event| {
            events.push(event);
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        assert_eq!(
            events,
            vec![
                DfsEvent::Discover { node: 1, parent: None },
                DfsEvent::Discover { node: 2, parent: Some(1) },
                DfsEvent::Revisit { node: 2, parent: Some(1), target: 1 },
                DfsEvent::Discover { node: 3, parent: Some(2) },
                DfsEvent::Finish { node: 3 },
                DfsEvent::Finish { node: 2 },
                DfsEvent::Finish { node: 1 },
            ]
        );

        // Already visited roots are skipped entirely.
        let flow = depth_first_visit(&adj, 2, &mut visited, |_| ControlFlow::Break(()));
        assert!(flow.is_continue());
    }

    #[test]
    fn test_visit_stops_on_break() {
        let adj = adjacency(3, &[(1, 2), (2, 3)]);
        let mut visited = VisitedFlags::new(adj.slot_count());
        let flow = depth_first_visit(&adj, 1, &mut visited, |event| match event {
            DfsEvent::Discover { node: 2, .. } => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        });
        assert!(flow.is_break());
        assert!(!visited.is_visited(3));
    }

    #[test]
    fn test_component_count_follows_stored_direction() {
        // 2 -> 1 is not followed from root 1, so 1 and 2 are separate floods.
        let adj = adjacency(3, &[(2, 1)]);
        assert_eq!(connected_component_count(&adj), 3);

        let adj = adjacency(3, &[(1, 2)]);
        assert_eq!(connected_component_count(&adj), 2);
    }

    #[test]
    fn test_two_coloring() {
        let square = adjacency(4, &[(1, 2), (2, 1), (2, 3), (3, 2), (3, 4), (4, 3), (4, 1), (1, 4)]);
        assert!(is_two_colorable(&square));

        let triangle = adjacency(3, &[(1, 2), (2, 1), (2, 3), (3, 2), (3, 1), (1, 3)]);
        assert!(!is_two_colorable(&triangle));
    }

    #[test]
    fn test_finish_order() {
        let adj = adjacency(4, &[(1, 2), (2, 3), (4, 1)]);
        assert_eq!(finish_order(&adj), vec![3, 2, 1, 4]);
    }
}
