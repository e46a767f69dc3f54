//! How queries treat node ids that were never inserted.

use serde::{Deserialize, Serialize};

/// Policy applied by traversal queries when `start` or `end` is unknown.
///
/// Insertion never fails under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingNodePolicy {
    /// An unknown id behaves like a node with no neighbours.
    /// Traversal from it yields `[start]`; paths through it yield `None`.
    #[default]
    Lenient,
    /// An unknown id is reported as [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound).
    Strict,
}

impl MissingNodePolicy {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    /// Parse from a name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}
