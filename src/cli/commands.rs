//! CLI command implementations.

use crate::graph::{AdjacencyOrder, GraphOptions, Traversal, WeightedGraph};
use crate::types::{Edge, GraphResult, VertexId};

/// Build the graph described on the command line.
///
/// Each edge spec is parsed as `START,END[,WEIGHT]`; the first bad one is
/// returned as `InvalidEdgeSpec`.
pub fn load_graph(
    vertex_count: i64,
    edge_specs: &[String],
    insertion_order: bool,
) -> GraphResult<WeightedGraph> {
    let edges = edge_specs
        .iter()
        .map(|spec| spec.parse::<Edge>())
        .collect::<GraphResult<Vec<Edge>>>()?;

    let order = if insertion_order {
        AdjacencyOrder::Insertion
    } else {
        AdjacencyOrder::ByTarget
    };
    WeightedGraph::with_options(vertex_count, edges, GraphOptions::with_order(order))
}

/// Display vertex and edge counts plus every outgoing edge list.
pub fn cmd_info(graph: &WeightedGraph, json: bool) -> GraphResult<()> {
    let mut adjacency = Vec::with_capacity(graph.vertex_count());
    for vertex in 1..=graph.vertex_count() as VertexId {
        adjacency.push((vertex, graph.edges_from(vertex)?));
    }

    if json {
        let lists: Vec<serde_json::Value> = adjacency
            .iter()
            .map(|(vertex, edges)| serde_json::json!({"vertex": vertex, "edges": edges}))
            .collect();
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "order": graph.order(),
            "adjacency": lists,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Order: {}", graph.order());
        for (vertex, edges) in adjacency {
            let targets: Vec<String> = edges
                .iter()
                .map(|e| format!("{}({})", e.end, e.weight))
                .collect();
            println!("  {}: {}", vertex, targets.join(" "));
        }
    }
    Ok(())
}

/// Report whether an edge `start -> end` exists.
pub fn cmd_adjacent(
    graph: &WeightedGraph,
    start: VertexId,
    end: VertexId,
    json: bool,
) -> GraphResult<()> {
    let adjacent = graph.is_adjacent(start, end)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "end": end, "adjacent": adjacent})
        );
    } else if adjacent {
        println!("{} -> {}: adjacent", start, end);
    } else {
        println!("{} -> {}: not adjacent", start, end);
    }
    Ok(())
}

/// Print the dense adjacency matrix, including the unused row/column 0.
pub fn cmd_matrix(graph: &WeightedGraph, json: bool) -> GraphResult<()> {
    let matrix = graph.adjacency_matrix();
    if json {
        println!("{}", serde_json::json!({ "matrix": matrix }));
    } else {
        for row in &matrix {
            let cells: Vec<String> = row.iter().map(|w| format!("{:>6}", w)).collect();
            println!("{}", cells.join(" "));
        }
    }
    Ok(())
}

/// Search for a path with the given traversal.
pub fn cmd_path(
    graph: &WeightedGraph,
    traversal: Traversal,
    start: VertexId,
    end: VertexId,
    json: bool,
) -> GraphResult<()> {
    let path = traversal.find_path(graph, start, end)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "traversal": traversal,
                "start": start,
                "end": end,
                "path": path,
            })
        );
    } else {
        match path {
            Some(path) => {
                let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                println!("{}: {}", traversal, hops.join(" -> "));
            }
            None => println!("{}: no path from {} to {}", traversal, start, end),
        }
    }
    Ok(())
}
