//! graph-walk — undirected adjacency-list graphs with breadth-first search.
//!
//! Nodes are any hashable, cloneable value. Edges are unweighted and stored on
//! both endpoints. Queries cover breadth-first traversal and shortest paths by
//! edge count.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    breadth_first_traversal, distance, shortest_path, Graph, GraphBuilder, GraphStats,
};
pub use types::{GraphError, GraphResult, MissingNodePolicy};
