//! Core graph structure — an undirected adjacency list.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::MissingNodePolicy;

/// Undirected, unweighted graph over hashable node ids.
///
/// Every edge is stored on both endpoints. Self-loops and parallel edges are
/// kept as repeated entries; they change traversal order, never reachability.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    /// Node id -> neighbours, in insertion order.
    adjacency: HashMap<N, Vec<N>>,
    /// Node ids in first-insertion order.
    order: Vec<N>,
    /// Number of `add_edge` calls.
    edge_count: usize,
    /// How queries treat unknown ids.
    policy: MissingNodePolicy,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
            edge_count: 0,
            policy: MissingNodePolicy::default(),
        }
    }
}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Create a new empty graph with the lenient policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with the given policy.
    pub fn with_policy(policy: MissingNodePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The policy applied by traversal queries.
    pub fn policy(&self) -> MissingNodePolicy {
        self.policy
    }

    /// Change the policy applied by traversal queries.
    pub fn set_policy(&mut self, policy: MissingNodePolicy) {
        self.policy = policy;
    }

    /// Ensure `id` is present. No-op if it already is.
    pub fn add_node(&mut self, id: N) {
        if !self.adjacency.contains_key(&id) {
            self.order.push(id.clone());
            self.adjacency.insert(id, Vec::new());
        }
    }

    /// Add an undirected edge, inserting either endpoint if needed.
    ///
    /// `b` is appended to `a`'s neighbours and `a` to `b`'s, so a self-loop
    /// lists the node twice on itself.
    pub fn add_edge(&mut self, a: N, b: N) {
        self.add_node(a.clone());
        self.add_node(b.clone());
        self.adjacency.entry(a.clone()).or_default().push(b.clone());
        self.adjacency.entry(b).or_default().push(a);
        self.edge_count += 1;
    }

    /// Whether `id` has been inserted.
    pub fn contains_node(&self, id: &N) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Neighbours of `id` in insertion order. Unknown ids have none.
    pub fn neighbors(&self, id: &N) -> &[N] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Length of `id`'s adjacency list (a self-loop counts twice).
    pub fn degree(&self, id: &N) -> usize {
        self.neighbors(id).len()
    }

    /// All node ids in first-insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges, each undirected edge counted once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if no node has been inserted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<N: Eq + Hash> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self.adjacency == other.adjacency
            && self.edge_count == other.edge_count
            && self.policy == other.policy
    }
}

impl<N: Eq + Hash> Eq for Graph<N> {}
