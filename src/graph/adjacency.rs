//! Owned adjacency-list storage.
//!
//! Nodes are labelled `1..=node_count`. Storage keeps one list per label plus
//! an always-empty slot `0`, so labels index the lists directly.

use core::ops::RangeInclusive;

use crate::error::{GraphError, Result};
use crate::graph::NodeId;

/// One adjacency entry: the neighbour reached and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    /// Node at the far end of the entry.
    pub target: NodeId,
    /// Edge weight.
    pub weight: W,
}

/// A `(source, target, weight)` view of one adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef<W> {
    /// Node owning the adjacency list.
    pub source: NodeId,
    /// Neighbour reached.
    pub target: NodeId,
    /// Edge weight.
    pub weight: W,
}

/// Adjacency lists for a fixed set of nodes.
///
/// The node set never changes after construction and entries are only ever
/// appended, so insertion order is preserved. The logical edge count is kept
/// separately because an undirected edge occupies two entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList<W> {
    lists: Vec<Vec<Edge<W>>>,
    edge_count: usize,
}

impl<W: Copy> AdjacencyList<W> {
    /// Creates storage for `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            lists: (0..=node_count).map(|_| Vec::new()).collect(),
            edge_count: 0,
        }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.lists.len() - 1
    }

    /// Returns the number of logical edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All valid labels, `1..=node_count`.
    pub fn nodes(&self) -> RangeInclusive<NodeId> {
        1..=self.node_count()
    }

    /// Returns true if `node` is a valid label.
    pub fn contains(&self, node: NodeId) -> bool {
        node != 0 && node < self.lists.len()
    }

    /// Returns `node` if it is a valid label.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] otherwise.
    pub fn check_node(&self, node: NodeId) -> Result<NodeId> {
        if self.contains(node) {
            Ok(node)
        } else {
            log_debug!(node, node_count = self.node_count(), "rejected node label");
            Err(GraphError::InvalidNode {
                node,
                node_count: self.node_count(),
            })
        }
    }

    /// Adjacency entries of `node`, in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`] for invalid labels.
    pub fn neighbors(&self, node: NodeId) -> Result<&[Edge<W>]> {
        self.check_node(node)?;
        Ok(&self.lists[node])
    }

    /// Unchecked variant of [`neighbors`](Self::neighbors) for labels already
    /// known to be valid.
    #[inline]
    pub(crate) fn edges_of(&self, node: NodeId) -> &[Edge<W>] {
        &self.lists[node]
    }

    /// Number of slots a per-node table needs (`node_count + 1`).
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.lists.len()
    }

    /// Appends one entry `from -> to` without touching the edge count.
    ///
    /// Callers validate both labels first.
    pub(crate) fn push_arc(&mut self, from: NodeId, to: NodeId, weight: W) {
        self.lists[from].push(Edge { target: to, weight });
    }

    /// Records one logical edge.
    pub(crate) fn count_edge(&mut self) {
        self.edge_count += 1;
    }

    /// Number of entries pointing at each slot, indexed by label.
    pub(crate) fn in_degrees(&self) -> Vec<usize> {
        let mut in_degrees = vec![0; self.slot_count()];
        for edge in self.lists.iter().flatten() {
            in_degrees[edge.target] += 1;
        }
        in_degrees
    }

    /// Reverses every entry, keeping weights and the edge count.
    ///
    /// Entries of the result are ordered by ascending source label.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.node_count());
        for arc in self.arcs() {
            transposed.push_arc(arc.target, arc.source, arc.weight);
        }
        transposed.edge_count = self.edge_count;
        transposed
    }

    /// Iterates every entry as an [`EdgeRef`], by ascending source label.
    pub fn arcs(&self) -> Arcs<'_, W> {
        Arcs {
            lists: &self.lists,
            source: 1,
            cursor: 0,
        }
    }
}

/// Iterator over all adjacency entries, created by [`AdjacencyList::arcs`].
pub struct Arcs<'a, W> {
    lists: &'a [Vec<Edge<W>>],
    source: NodeId,
    cursor: usize,
}

impl<W: Copy> Iterator for Arcs<'_, W> {
    type Item = EdgeRef<W>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(list) = self.lists.get(self.source) {
            if let Some(edge) = list.get(self.cursor) {
                self.cursor += 1;
                return Some(EdgeRef {
                    source: self.source,
                    target: edge.target,
                    weight: edge.weight,
                });
            }
            self.source += 1;
            self.cursor = 0;
        }
        None
    }
}
