//! # `duograph` - Directed and Undirected Graph Algorithms
//!
//! Weighted graphs over integer-labelled nodes with a shared algorithm surface
//! for both edge directionalities: traversal, connectivity, structural
//! classification and cycle detection.
//!
//! ## Node Labelling
//!
//! A graph is created with a fixed node count `N`. Nodes are labelled `1..=N`;
//! label `0` is reserved and never valid. Every operation taking a node checks
//! it and reports [`GraphError::InvalidNode`] instead of indexing out of range.
//!
//! ## Architecture
//!
//! 1. **Shared capability trait** ([`Graph`]):
//!    - BFS / DFS traversal, connected components and bipartiteness are written
//!      once as free functions over an [`AdjacencyList`]
//!    - Edge insertion, cycle detection, tree detection and strong connectivity
//!      are supplied by each variant
//!
//! 2. **Variants**:
//!    - [`DirectedGraph`]: recursion-stack cycle check, in-degree tree check,
//!      Kosaraju strongly connected components
//!    - [`UndirectedGraph`]: parent-excluding cycle check, `N - 1` edge tree
//!      check, strong connectivity equal to plain connectivity
//!    - [`AnyGraph`]: closed sum over both, for kinds chosen at runtime
//!
//! 3. **Explicit-stack traversal**: no algorithm recurses on the call stack, so
//!    long paths with hundreds of thousands of nodes are handled.
//!
//! ## Example
//!
//! ```rust
//! use duograph::{DirectedGraph, Graph};
//!
//! let mut graph: DirectedGraph = DirectedGraph::new(5);
//! for (x, y) in [(1, 2), (2, 3), (3, 1), (4, 5)] {
//!     graph.add_edge(x, y)?;
//! }
//!
//! assert!(graph.is_cyclic());
//! assert_eq!(graph.strongly_connected_component_count(), 3);
//! # Ok::<(), duograph::GraphError>(())
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, construction, rejected inputs and
//! algorithm results are reported as `tracing` events.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    AdjacencyList, AnyGraph, Arcs, Bfs, Dfs, DirectedGraph, Edge, EdgeRef, Graph, GraphKind, NodeId,
    UndirectedGraph,
};
