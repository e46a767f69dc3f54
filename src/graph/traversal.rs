//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::types::{GraphError, GraphResult, MissingNodePolicy};

use super::Graph;

/// Reject `id` under the strict policy if it was never inserted.
fn check_known<N: Eq + Hash + Clone + Debug>(graph: &Graph<N>, id: &N) -> GraphResult<()> {
    if graph.policy() == MissingNodePolicy::Strict && !graph.contains_node(id) {
        return Err(GraphError::node_not_found(id));
    }
    Ok(())
}

/// BFS traversal from `start`, returning nodes in discovery order.
///
/// Neighbours already visited are filtered when enqueued, and a node that was
/// enqueued twice before its first dequeue is skipped the second time. Each
/// reachable node appears exactly once.
///
/// An unknown `start` yields `[start]` under the lenient policy.
pub fn breadth_first_traversal<N>(graph: &Graph<N>, start: &N) -> GraphResult<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
{
    check_known(graph, start)?;

    let mut visited: HashSet<N> = HashSet::new();
    let mut order: Vec<N> = Vec::new();
    let mut queue: VecDeque<N> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if visited.contains(&current) {
            continue;
        }
        trace!("bfs visit {:?}", current);
        visited.insert(current.clone());
        queue.extend(
            graph
                .neighbors(&current)
                .iter()
                .filter(|n| !visited.contains(*n))
                .cloned(),
        );
        order.push(current);
    }

    debug!("bfs from {:?} reached {} nodes", start, order.len());
    Ok(order)
}

/// Shortest path (fewest edges) from `start` to `end`, inclusive.
///
/// `start == end` returns `[start]` without consulting the graph. `None` means
/// no path exists. Among equally short paths the one whose frontier was
/// enqueued first wins, so results follow edge insertion order.
pub fn shortest_path<N>(graph: &Graph<N>, start: &N, end: &N) -> GraphResult<Option<Vec<N>>>
where
    N: Eq + Hash + Clone + Debug,
{
    if start == end {
        return Ok(Some(vec![start.clone()]));
    }
    check_known(graph, start)?;
    check_known(graph, end)?;

    let mut visited: HashSet<N> = HashSet::new();
    let mut parent: HashMap<N, N> = HashMap::new();
    let mut queue: VecDeque<N> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        trace!("shortest_path expand {:?}", current);
        for neighbor in graph.neighbors(&current) {
            if visited.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            parent.insert(neighbor.clone(), current.clone());

            if neighbor == end {
                let path = backtrack(&parent, start, end);
                debug!(
                    "shortest_path {:?} -> {:?}: {} edges",
                    start,
                    end,
                    path.len() - 1
                );
                return Ok(Some(path));
            }
            queue.push_back(neighbor.clone());
        }
    }

    debug!("shortest_path {:?} -> {:?}: no path", start, end);
    Ok(None)
}

/// Number of edges on the shortest path, or `None` if unreachable.
pub fn distance<N>(graph: &Graph<N>, start: &N, end: &N) -> GraphResult<Option<usize>>
where
    N: Eq + Hash + Clone + Debug,
{
    Ok(shortest_path(graph, start, end)?.map(|path| path.len() - 1))
}

/// Walk parent pointers from `end` back to `start`.
fn backtrack<N: Eq + Hash + Clone>(parent: &HashMap<N, N>, start: &N, end: &N) -> Vec<N> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        match parent.get(current) {
            Some(prev) => {
                path.push(prev.clone());
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

impl<N: Eq + Hash + Clone + Debug> Graph<N> {
    /// See [`breadth_first_traversal`].
    pub fn bfs(&self, start: &N) -> GraphResult<Vec<N>> {
        breadth_first_traversal(self, start)
    }

    /// See [`shortest_path`].
    pub fn shortest_path(&self, start: &N, end: &N) -> GraphResult<Option<Vec<N>>> {
        shortest_path(self, start, end)
    }

    /// See [`distance`].
    pub fn distance(&self, start: &N, end: &N) -> GraphResult<Option<usize>> {
        distance(self, start, end)
    }
}
