use thiserror::Error;

use crate::graph::{GraphKind, NodeId};

/// Errors reported by graph operations.
///
/// Every failure is returned to the caller synchronously; no operation panics
/// on caller-supplied input.
///
/// # Examples
///
/// ```rust
/// use duograph::{Graph, GraphError, UndirectedGraph};
///
/// let mut graph: UndirectedGraph = UndirectedGraph::new(3);
/// match graph.add_edge(1, 4) {
///     Err(GraphError::InvalidNode { node, node_count }) => {
///         assert_eq!((node, node_count), (4, 3));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node identifier outside `1..=node_count`.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    InvalidNode {
        /// The rejected identifier.
        node: NodeId,
        /// Node count of the graph that rejected it.
        node_count: usize,
    },

    /// The operation has no implementation for this kind of graph.
    #[error("{operation} is not supported on {kind} graphs")]
    UnsupportedOperation {
        /// Name of the refused operation.
        operation: &'static str,
        /// Kind of the graph it was invoked on.
        kind: GraphKind,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
