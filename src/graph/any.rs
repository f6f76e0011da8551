//! A graph whose directionality is chosen at runtime.

use num_traits::PrimInt;

use crate::error::Result;
use crate::graph::{AdjacencyList, DirectedGraph, Graph, GraphKind, NodeId, UndirectedGraph};

/// Closed sum over the two graph variants.
///
/// The variant is fixed when the value is created; every [`Graph`] method
/// dispatches to it.
///
/// ```rust
/// use duograph::{AnyGraph, Graph, GraphKind};
///
/// let mut graph: AnyGraph = AnyGraph::new(GraphKind::Undirected, 3);
/// graph.add_edge(1, 2)?;
/// graph.add_edge(2, 3)?;
/// assert!(graph.is_tree());
/// # Ok::<(), duograph::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGraph<W = i64> {
    /// A directed graph.
    Directed(DirectedGraph<W>),
    /// An undirected graph.
    Undirected(UndirectedGraph<W>),
}

macro_rules! dispatch {
    ($graph:expr, $inner:ident => $body:expr) => {
        match $graph {
            AnyGraph::Directed($inner) => $body,
            AnyGraph::Undirected($inner) => $body,
        }
    };
}

impl<W: PrimInt> AnyGraph<W> {
    /// Creates an edgeless graph of the given kind.
    pub fn new(kind: GraphKind, node_count: usize) -> Self {
        match kind {
            GraphKind::Directed => Self::Directed(DirectedGraph::new(node_count)),
            GraphKind::Undirected => Self::Undirected(UndirectedGraph::new(node_count)),
        }
    }

    /// The directed graph, if this is one.
    pub fn as_directed(&self) -> Option<&DirectedGraph<W>> {
        match self {
            Self::Directed(graph) => Some(graph),
            Self::Undirected(_) => None,
        }
    }

    /// The undirected graph, if this is one.
    pub fn as_undirected(&self) -> Option<&UndirectedGraph<W>> {
        match self {
            Self::Directed(_) => None,
            Self::Undirected(graph) => Some(graph),
        }
    }
}

impl<W: PrimInt> From<DirectedGraph<W>> for AnyGraph<W> {
    fn from(graph: DirectedGraph<W>) -> Self {
        Self::Directed(graph)
    }
}

impl<W: PrimInt> From<UndirectedGraph<W>> for AnyGraph<W> {
    fn from(graph: UndirectedGraph<W>) -> Self {
        Self::Undirected(graph)
    }
}

impl<W: PrimInt> Graph for AnyGraph<W> {
    type Weight = W;

    fn kind(&self) -> GraphKind {
        dispatch!(self, graph => graph.kind())
    }

    fn adjacency(&self) -> &AdjacencyList<W> {
        dispatch!(self, graph => graph.adjacency())
    }

    fn add_weighted_edge(&mut self, x: NodeId, y: NodeId, weight: W) -> Result<()> {
        dispatch!(self, graph => graph.add_weighted_edge(x, y, weight))
    }

    fn is_bipartite(&self) -> Result<bool> {
        dispatch!(self, graph => graph.is_bipartite())
    }

    fn is_cyclic(&self) -> bool {
        dispatch!(self, graph => graph.is_cyclic())
    }

    fn is_tree(&self) -> bool {
        dispatch!(self, graph => graph.is_tree())
    }

    fn strongly_connected_component_count(&self) -> usize {
        dispatch!(self, graph => graph.strongly_connected_component_count())
    }
}
