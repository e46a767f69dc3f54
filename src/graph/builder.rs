//! Fluent API for building Graph instances.

use std::hash::Hash;

use crate::types::MissingNodePolicy;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Insertions are replayed in call order, so the result matches the graph
/// produced by the equivalent `add_node`/`add_edge` calls.
pub struct GraphBuilder<N> {
    policy: MissingNodePolicy,
    steps: Vec<Step<N>>,
}

enum Step<N> {
    Node(N),
    Edge(N, N),
}

impl<N: Eq + Hash + Clone> GraphBuilder<N> {
    /// Create a new builder with the lenient policy.
    pub fn new() -> Self {
        Self {
            policy: MissingNodePolicy::default(),
            steps: Vec::new(),
        }
    }

    /// Set the policy of the built graph.
    pub fn policy(mut self, policy: MissingNodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add a node.
    pub fn node(mut self, id: N) -> Self {
        self.steps.push(Step::Node(id));
        self
    }

    /// Add an undirected edge.
    pub fn edge(mut self, a: N, b: N) -> Self {
        self.steps.push(Step::Edge(a, b));
        self
    }

    /// Add several undirected edges.
    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        self.steps
            .extend(edges.into_iter().map(|(a, b)| Step::Edge(a, b)));
        self
    }

    /// Build the final graph.
    pub fn build(self) -> Graph<N> {
        let mut graph = Graph::with_policy(self.policy);
        for step in self.steps {
            match step {
                Step::Node(id) => graph.add_node(id),
                Step::Edge(a, b) => graph.add_edge(a, b),
            }
        }
        graph
    }
}

impl<N: Eq + Hash + Clone> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
