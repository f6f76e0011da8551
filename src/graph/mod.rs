//! Graph variants and the capability trait they share.
//!
//! The graph modules are organized as:
//! - `adjacency`: the owned adjacency-list storage
//! - `algorithms`: traversals and connectivity shared by every variant
//! - `directed` / `undirected`: the two concrete variants
//! - `any`: a closed sum type over both variants

use core::fmt;

use num_traits::{One, PrimInt};

use crate::error::Result;

pub(crate) mod access;
pub mod adjacency;
pub mod algorithms;
pub mod any;
pub mod directed;
pub mod undirected;

pub use adjacency::{AdjacencyList, Arcs, Edge, EdgeRef};
pub use algorithms::{Bfs, Dfs};
pub use any::AnyGraph;
pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

/// Node label. Valid labels are `1..=node_count`; `0` is reserved.
pub type NodeId = usize;

/// Edge directionality of a graph, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// Edges are followed from source to destination only.
    Directed,
    /// Edges are followed in both directions.
    Undirected,
}

impl GraphKind {
    /// Returns true if the graph is directed.
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

/// Capabilities shared by directed and undirected graphs.
///
/// Traversals, connected components and bipartiteness are provided here and
/// behave identically for every variant: they follow the adjacency lists as
/// stored. Edge insertion, cycle detection, tree detection and strongly
/// connected components depend on directionality and are supplied by each
/// variant.
///
/// Queries never cache; each call recomputes from the current edges.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(1)\) amortized | Appends to adjacency lists |
/// | `breadth_first_traversal` | \(O(n + m)\) | Queue-based |
/// | `depth_first_traversal` | \(O(n + m)\) | Explicit stack, recursive order |
/// | `connected_component_count` | \(O(n + m)\) | Flood fill per root |
/// | `is_bipartite` | \(O(n + m)\) | DFS two-colouring |
pub trait Graph {
    /// Integer edge weight type.
    type Weight: PrimInt;

    /// Directionality of this graph.
    fn kind(&self) -> GraphKind;

    /// Read access to the adjacency lists.
    fn adjacency(&self) -> &AdjacencyList<Self::Weight>;

    /// Inserts an edge `x -> y` of weight `weight`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNode`](crate::GraphError::InvalidNode) if
    /// either endpoint is outside `1..=node_count`; the graph is unchanged.
    fn add_weighted_edge(&mut self, x: NodeId, y: NodeId, weight: Self::Weight) -> Result<()>;

    /// Inserts an edge `x -> y` with the default weight of 1.
    ///
    /// # Errors
    /// Same as [`add_weighted_edge`](Graph::add_weighted_edge).
    fn add_edge(&mut self, x: NodeId, y: NodeId) -> Result<()> {
        self.add_weighted_edge(x, y, Self::Weight::one())
    }

    /// Number of nodes, fixed at construction.
    fn node_count(&self) -> usize {
        self.adjacency().node_count()
    }

    /// Number of logical edges inserted so far.
    fn edge_count(&self) -> usize {
        self.adjacency().edge_count()
    }

    /// Adjacency entries of `node`, in insertion order.
    ///
    /// # Errors
    /// Returns `InvalidNode` for labels outside `1..=node_count`.
    fn neighbors(&self, node: NodeId) -> Result<&[Edge<Self::Weight>]> {
        self.adjacency().neighbors(node)
    }

    /// Number of adjacency entries of `node`.
    ///
    /// # Errors
    /// Returns `InvalidNode` for labels outside `1..=node_count`.
    fn out_degree(&self, node: NodeId) -> Result<usize> {
        Ok(self.neighbors(node)?.len())
    }

    /// Every adjacency entry as a `(source, target, weight)` view.
    ///
    /// Undirected edges appear once per stored direction.
    fn edges(&self) -> Arcs<'_, Self::Weight> {
        self.adjacency().arcs()
    }

    /// Lazy breadth-first traversal from `source`.
    ///
    /// # Errors
    /// Returns `InvalidNode` if `source` is outside `1..=node_count`.
    fn bfs(&self, source: NodeId) -> Result<Bfs<'_, Self::Weight>> {
        let adjacency = self.adjacency();
        adjacency.check_node(source)?;
        Ok(Bfs::new(adjacency, source))
    }

    /// Lazy depth-first traversal from `source`.
    ///
    /// # Errors
    /// Returns `InvalidNode` if `source` is outside `1..=node_count`.
    fn dfs(&self, source: NodeId) -> Result<Dfs<'_, Self::Weight>> {
        let adjacency = self.adjacency();
        adjacency.check_node(source)?;
        Ok(Dfs::new(adjacency, source))
    }

    /// Nodes in breadth-first discovery order from `source`.
    ///
    /// Each node reachable from `source` appears exactly once; unreachable
    /// nodes are omitted.
    ///
    /// # Errors
    /// Returns `InvalidNode` if `source` is outside `1..=node_count`.
    fn breadth_first_traversal(&self, source: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.bfs(source)?.collect())
    }

    /// Nodes in depth-first discovery order from `source`.
    ///
    /// A neighbour is explored completely before the next one; ties follow
    /// adjacency insertion order. Unreachable nodes are omitted.
    ///
    /// # Errors
    /// Returns `InvalidNode` if `source` is outside `1..=node_count`.
    fn depth_first_traversal(&self, source: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.dfs(source)?.collect())
    }

    /// Number of flood fills needed to cover `1..=node_count`.
    ///
    /// Floods follow stored adjacency only, so on a directed graph this counts
    /// forward-reachability components rather than weak components.
    fn connected_component_count(&self) -> usize {
        algorithms::connected_component_count(self.adjacency())
    }

    /// Whether the nodes can be two-coloured along the stored adjacency.
    ///
    /// # Errors
    /// Variants without an implementation return
    /// [`GraphError::UnsupportedOperation`](crate::GraphError::UnsupportedOperation).
    fn is_bipartite(&self) -> Result<bool> {
        Ok(algorithms::is_two_colorable(self.adjacency()))
    }

    /// Whether the graph contains a cycle.
    fn is_cyclic(&self) -> bool;

    /// Whether the graph is a tree (rooted tree for directed graphs).
    fn is_tree(&self) -> bool;

    /// Number of strongly connected components.
    fn strongly_connected_component_count(&self) -> usize;
}
