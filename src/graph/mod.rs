//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod builder;
pub mod stats;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::GraphBuilder;
pub use stats::GraphStats;
pub use traversal::{breadth_first_traversal, distance, shortest_path};
