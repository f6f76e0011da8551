//! An undirected weighted graph over a fixed node set.
//!
//! Each edge is stored in both endpoints' adjacency lists but counted once.

use core::ops::ControlFlow;

use num_traits::PrimInt;

use crate::error::Result;
use crate::graph::access::visited::VisitedFlags;
use crate::graph::algorithms::{depth_first_visit, DfsEvent};
use crate::graph::{AdjacencyList, Graph, GraphKind, NodeId};

/// An undirected graph with `node_count` nodes labelled `1..=node_count`.
///
/// A self-loop `(x, x)` occupies two entries in `x`'s list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<W = i64> {
    adjacency: AdjacencyList<W>,
}

impl<W: PrimInt> UndirectedGraph<W> {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        log_debug!(node_count, "created undirected graph");
        Self {
            adjacency: AdjacencyList::new(node_count),
        }
    }

    /// Creates a graph and inserts each `(x, y)` pair with weight 1.
    ///
    /// # Errors
    /// Returns `InvalidNode` for the first pair with an endpoint outside
    /// `1..=node_count`.
    pub fn with_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new(node_count);
        for (x, y) in edges {
            graph.add_edge(x, y)?;
        }
        Ok(graph)
    }
}

impl<W: PrimInt> Graph for UndirectedGraph<W> {
    type Weight = W;

    fn kind(&self) -> GraphKind {
        GraphKind::Undirected
    }

    fn adjacency(&self) -> &AdjacencyList<W> {
        &self.adjacency
    }

    fn add_weighted_edge(&mut self, x: NodeId, y: NodeId, weight: W) -> Result<()> {
        self.adjacency.check_node(x)?;
        self.adjacency.check_node(y)?;
        self.adjacency.push_arc(x, y, weight);
        self.adjacency.push_arc(y, x, weight);
        self.adjacency.count_edge();
        Ok(())
    }

    /// An entry reaching a visited node other than the one the current node
    /// was discovered from closes a cycle.
    ///
    /// The exclusion is by parent node, so the second of two parallel edges
    /// closes a cycle.
    fn is_cyclic(&self) -> bool {
        let mut visited = VisitedFlags::new(self.adjacency.slot_count());
        let cyclic = self.adjacency.nodes().any(|root| {
            depth_first_visit(&self.adjacency, root, &mut visited, |event| match event {
                DfsEvent::Revisit { parent, target, .. } if parent != Some(target) => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            })
            .is_break()
        });

        log_trace!(cyclic, "undirected cycle check");
        cyclic
    }

    /// Connected with exactly `node_count - 1` edges.
    fn is_tree(&self) -> bool {
        self.adjacency.node_count().checked_sub(1) == Some(self.adjacency.edge_count())
            && self.connected_component_count() == 1
    }

    /// Strong connectivity coincides with connectivity without directions.
    fn strongly_connected_component_count(&self) -> usize {
        self.connected_component_count()
    }
}
