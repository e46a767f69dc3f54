//! Error types for the graph-walk library.

use thiserror::Error;

/// All errors that can occur in the graph-walk library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A query named a node that is not in the graph (strict policy only).
    #[error("Node {0} not found")]
    NodeNotFound(String),
}

impl GraphError {
    /// Build a `NodeNotFound` from any debuggable node id.
    pub fn node_not_found<N: std::fmt::Debug>(id: &N) -> Self {
        GraphError::NodeNotFound(format!("{:?}", id))
    }
}

/// Convenience result type for graph-walk operations.
pub type GraphResult<T> = Result<T, GraphError>;
