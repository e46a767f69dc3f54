//! Build the five-edge reference graph and print traversal and path results as JSON.

use graph_walk::*;

fn main() -> GraphResult<()> {
    let _ = env_logger::try_init();

    let graph = GraphBuilder::new()
        .edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")])
        .build();

    let queries = [
        ("A", "E"),
        ("B", "C"),
        ("C", "D"),
        ("E", "A"),
        ("A", "A"),
        ("B", "E"),
        ("D", "C"),
        ("E", "D"),
        ("C", "E"),
        ("B", "D"),
        ("D", "B"),
        ("E", "C"),
    ];

    let mut paths = Vec::new();
    for (start, end) in queries {
        let path = graph.shortest_path(&start, &end)?;
        paths.push(serde_json::json!({
            "start": start,
            "end": end,
            "path": path,
        }));
    }

    let report = serde_json::json!({
        "bfs_from_a": graph.bfs(&"A")?,
        "shortest_paths": paths,
        "stats": graph.stats(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).unwrap_or_default()
    );
    Ok(())
}
