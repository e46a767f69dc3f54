//! Phase 1 tests: adjacency structure, insertion, and error types.

use graph_walk::graph::Graph;
use graph_walk::types::error::GraphError;
use graph_walk::types::MissingNodePolicy;

// ==================== Insertion Tests ====================

#[test]
fn test_new_graph_is_empty() {
    let graph: Graph<&str> = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.policy(), MissingNodePolicy::Lenient);
}

#[test]
fn test_add_node_idempotent() {
    let mut graph = Graph::new();
    graph.add_node("x");
    graph.add_edge("x", "y");
    let before = graph.neighbors(&"x").to_vec();

    graph.add_node("x");
    graph.add_node("x");

    assert_eq!(graph.neighbors(&"x"), before.as_slice());
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.nodes(), &["x", "y"]);
}

#[test]
fn test_add_node_without_edges() {
    let mut graph = Graph::new();
    graph.add_node(7u32);
    assert!(graph.contains_node(&7));
    assert!(graph.neighbors(&7).is_empty());
    assert_eq!(graph.degree(&7), 0);
}

#[test]
fn test_edge_symmetry() {
    let edges = [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")];
    let mut graph = Graph::new();
    for (a, b) in edges {
        graph.add_edge(a, b);
    }

    for (a, b) in edges {
        assert!(graph.neighbors(&a).contains(&b), "{} missing from {}", b, a);
        assert!(graph.neighbors(&b).contains(&a), "{} missing from {}", a, b);
    }
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn test_add_edge_inserts_endpoints() {
    let mut graph = Graph::new();
    graph.add_edge(1, 2);
    assert!(graph.contains_node(&1));
    assert!(graph.contains_node(&2));
    assert_eq!(graph.nodes(), &[1, 2]);
}

#[test]
fn test_neighbor_order_follows_insertion() {
    let mut graph = Graph::new();
    graph.add_edge("hub", "c");
    graph.add_edge("hub", "a");
    graph.add_edge("b", "hub");
    assert_eq!(graph.neighbors(&"hub"), &["c", "a", "b"]);
}

#[test]
fn test_no_dangling_references() {
    let mut graph = Graph::new();
    graph.add_edge("p", "q");
    graph.add_edge("q", "r");
    graph.add_edge("s", "s");
    for node in graph.nodes() {
        for neighbor in graph.neighbors(node) {
            assert!(graph.contains_node(neighbor));
        }
    }
}

#[test]
fn test_self_loop_listed_twice() {
    let mut graph = Graph::new();
    graph.add_edge("a", "a");
    assert_eq!(graph.neighbors(&"a"), &["a", "a"]);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_parallel_edges_kept() {
    let mut graph = Graph::new();
    graph.add_edge("a", "b");
    graph.add_edge("a", "b");
    assert_eq!(graph.neighbors(&"a"), &["b", "b"]);
    assert_eq!(graph.neighbors(&"b"), &["a", "a"]);
    assert_eq!(graph.degree(&"a"), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_unknown_node_has_no_neighbors() {
    let mut graph = Graph::new();
    graph.add_edge("a", "b");
    assert!(!graph.contains_node(&"zz"));
    assert!(graph.neighbors(&"zz").is_empty());
    // Reading does not insert.
    assert!(!graph.contains_node(&"zz"));
}

#[test]
fn test_tuple_node_ids() {
    let mut graph = Graph::new();
    graph.add_edge((0, 0), (0, 1));
    graph.add_edge((0, 1), (1, 1));
    assert_eq!(graph.neighbors(&(0, 1)), &[(0, 0), (1, 1)]);
}

// ==================== Policy & Error Tests ====================

#[test]
fn test_with_policy() {
    let mut graph: Graph<String> = Graph::with_policy(MissingNodePolicy::Strict);
    assert_eq!(graph.policy(), MissingNodePolicy::Strict);
    graph.set_policy(MissingNodePolicy::Lenient);
    assert_eq!(graph.policy(), MissingNodePolicy::Lenient);
}

#[test]
fn test_policy_names() {
    for policy in [MissingNodePolicy::Lenient, MissingNodePolicy::Strict] {
        assert_eq!(MissingNodePolicy::from_name(policy.name()), Some(policy));
    }
    assert_eq!(
        MissingNodePolicy::from_name("STRICT"),
        Some(MissingNodePolicy::Strict)
    );
    assert!(MissingNodePolicy::from_name("loose").is_none());
}

#[test]
fn test_policy_serde() {
    let json = serde_json::to_string(&MissingNodePolicy::Strict).unwrap();
    assert_eq!(json, "\"strict\"");
    let policy: MissingNodePolicy = serde_json::from_str("\"lenient\"").unwrap();
    assert_eq!(policy, MissingNodePolicy::Lenient);
}

#[test]
fn test_node_not_found_display() {
    let err = GraphError::node_not_found(&"Z");
    assert_eq!(err, GraphError::NodeNotFound("\"Z\"".to_string()));
    assert_eq!(err.to_string(), "Node \"Z\" not found");

    let err = GraphError::node_not_found(&42u64);
    assert_eq!(err.to_string(), "Node 42 not found");
}
