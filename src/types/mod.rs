//! Shared types: errors and query configuration.

pub mod error;
pub mod policy;

pub use error::{GraphError, GraphResult};
pub use policy::MissingNodePolicy;
