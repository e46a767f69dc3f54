//! Summary statistics over a graph.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use super::Graph;

/// Structural summary of a [`Graph`], serialisable for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges (each undirected edge once).
    pub edges: usize,
    /// Edges whose endpoints are the same node.
    pub self_loops: usize,
    /// Nodes with an empty adjacency list.
    pub isolated_nodes: usize,
    /// Connected components, isolated nodes included.
    pub components: usize,
}

impl<N: Eq + Hash + Clone + Debug> Graph<N> {
    /// Compute a [`GraphStats`] summary.
    pub fn stats(&self) -> GraphStats {
        let mut self_loop_entries = 0;
        let mut isolated_nodes = 0;
        for node in self.nodes() {
            let neighbors = self.neighbors(node);
            if neighbors.is_empty() {
                isolated_nodes += 1;
            }
            self_loop_entries += neighbors.iter().filter(|n| *n == node).count();
        }

        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            // Each self-loop is listed twice on its node.
            self_loops: self_loop_entries / 2,
            isolated_nodes,
            components: self.components().len(),
        }
    }

    /// Connected components, each in BFS order, ordered by their first node's
    /// insertion position.
    pub fn components(&self) -> Vec<Vec<N>> {
        let mut seen: HashSet<N> = HashSet::new();
        let mut components = Vec::new();
        for node in self.nodes() {
            if seen.contains(node) {
                continue;
            }
            // Every id in `nodes()` is known, so neither policy can reject it.
            let component = match self.bfs(node) {
                Ok(component) => component,
                Err(_) => continue,
            };
            seen.extend(component.iter().cloned());
            components.push(component);
        }
        components
    }
}
