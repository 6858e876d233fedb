//! Phase 1 tests: graph construction, adjacency queries, matrix export.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use weighted_digraph::graph::{AdjacencyOrder, GraphBuilder, GraphOptions, WeightedGraph};
use weighted_digraph::types::{Edge, GraphError};

fn targets(graph: &WeightedGraph, vertex: i64) -> Vec<i64> {
    graph
        .edges_from(vertex)
        .unwrap()
        .iter()
        .map(|e| e.end)
        .collect()
}

// ==================== Construction Tests ====================

#[test]
fn test_empty_graph() {
    let graph = WeightedGraph::new(0, Vec::new()).unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.adjacency_matrix(), vec![vec![0.0]]);
    assert_eq!(graph.edges().count(), 0);
}

#[test]
fn test_negative_vertex_count_rejected() {
    match WeightedGraph::new(-1, Vec::new()) {
        Err(GraphError::NegativeVertexCount(n)) => assert_eq!(n, -1),
        Err(e) => panic!("Expected NegativeVertexCount, got {:?}", e),
        Ok(_) => panic!("Expected NegativeVertexCount, got a graph"),
    }
}

#[test]
fn test_edge_endpoint_out_of_range() {
    let cases = [
        (Edge::new(1, 4, 1.0), 4),
        (Edge::new(4, 1, 1.0), 4),
        (Edge::new(0, 1, 1.0), 0),
        (Edge::new(2, -3, 1.0), -3),
    ];
    for (edge, bad) in cases {
        match WeightedGraph::new(3, vec![Edge::new(1, 2, 1.0), edge]) {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            }) => {
                assert_eq!(vertex, bad);
                assert_eq!(vertex_count, 3);
            }
            Err(e) => panic!("Expected VertexOutOfRange for {}, got {:?}", edge, e),
            Ok(_) => panic!("Expected VertexOutOfRange for {}, got a graph", edge),
        }
    }
}

#[test]
fn test_edge_on_empty_graph_out_of_range() {
    let result = WeightedGraph::new(0, vec![Edge::new(1, 1, 1.0)]);
    assert!(matches!(
        result,
        Err(GraphError::VertexOutOfRange { vertex: 1, vertex_count: 0 })
    ));
}

#[test]
fn test_duplicate_edges_dropped() {
    let edges = vec![
        Edge::new(1, 2, 1.0),
        Edge::new(1, 2, 1.0),
        Edge::new(2, 3, 0.5),
        Edge::new(1, 2, 1.0),
    ];
    let graph = WeightedGraph::new(3, edges).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edges_from(1).unwrap(), &[Edge::new(1, 2, 1.0)]);
    assert_eq!(graph.edges_from(2).unwrap(), &[Edge::new(2, 3, 0.5)]);
}

#[test]
fn test_same_pair_different_weight_kept() {
    let edges = vec![Edge::new(1, 2, 3.0), Edge::new(1, 2, 7.0)];
    let graph = WeightedGraph::new(2, edges).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edges_from(1).unwrap().len(), 2);
}

#[test]
fn test_by_target_order_is_default() {
    let edges = vec![
        Edge::new(1, 4, 1.0),
        Edge::new(1, 2, 1.0),
        Edge::new(1, 3, 1.0),
    ];
    let graph = WeightedGraph::new(4, edges).unwrap();
    assert_eq!(graph.order(), AdjacencyOrder::ByTarget);
    assert_eq!(targets(&graph, 1), vec![2, 3, 4]);
}

#[test]
fn test_by_target_sort_is_stable() {
    let edges = vec![
        Edge::new(1, 3, 9.0),
        Edge::new(1, 2, 1.0),
        Edge::new(1, 3, 4.0),
    ];
    let graph = WeightedGraph::new(3, edges).unwrap();
    let weights: Vec<f64> = graph.edges_from(1).unwrap().iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![1.0, 9.0, 4.0]);
}

#[test]
fn test_insertion_order_preserved() {
    let edges = vec![
        Edge::new(1, 4, 1.0),
        Edge::new(1, 2, 1.0),
        Edge::new(1, 4, 1.0),
        Edge::new(1, 3, 1.0),
    ];
    let options = GraphOptions::with_order(AdjacencyOrder::Insertion);
    let graph = WeightedGraph::with_options(4, edges, options).unwrap();
    assert_eq!(graph.order(), AdjacencyOrder::Insertion);
    assert_eq!(targets(&graph, 1), vec![4, 2, 3]);
}

#[test]
fn test_builder() {
    let mut builder = GraphBuilder::new(3);
    builder
        .edge(1, 3, 2.0)
        .edge(1, 2, 1.0)
        .edges(vec![Edge::new(2, 3, 1.5), Edge::new(2, 3, 1.5)])
        .order(AdjacencyOrder::Insertion);
    let graph = builder.build().unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(targets(&graph, 1), vec![3, 2]);
}

#[test]
fn test_builder_propagates_errors() {
    let mut builder = GraphBuilder::new(2);
    builder.edge(1, 5, 1.0);
    assert!(matches!(
        builder.build(),
        Err(GraphError::VertexOutOfRange { vertex: 5, .. })
    ));
}

#[test]
fn test_edges_iterates_by_start_vertex() {
    let edges = vec![
        Edge::new(3, 1, 1.0),
        Edge::new(1, 2, 1.0),
        Edge::new(2, 3, 1.0),
    ];
    let graph = WeightedGraph::new(3, edges).unwrap();
    let starts: Vec<i64> = graph.edges().map(|e| e.start).collect();
    assert_eq!(starts, vec![1, 2, 3]);
}

// ==================== Adjacency Tests ====================

#[test]
fn test_is_adjacent() {
    let graph = WeightedGraph::new(3, vec![Edge::new(1, 2, 4.0)]).unwrap();
    assert!(graph.is_adjacent(1, 2).unwrap());
    assert!(!graph.is_adjacent(2, 1).unwrap());
    assert!(!graph.is_adjacent(1, 3).unwrap());
    assert!(!graph.is_adjacent(3, 1).unwrap());
}

#[test]
fn test_is_adjacent_out_of_range() {
    let graph = WeightedGraph::new(3, vec![Edge::new(1, 2, 4.0)]).unwrap();
    for (start, end) in [(0, 1), (4, 1), (1, 0), (1, 4), (-2, 1)] {
        assert!(
            matches!(
                graph.is_adjacent(start, end),
                Err(GraphError::VertexOutOfRange { vertex_count: 3, .. })
            ),
            "expected range error for ({}, {})",
            start,
            end
        );
    }
}

#[test]
fn test_edges_from_out_of_range() {
    let graph = WeightedGraph::new(2, Vec::new()).unwrap();
    assert!(graph.edges_from(1).unwrap().is_empty());
    assert!(graph.edges_from(0).is_err());
    assert!(graph.edges_from(3).is_err());
}

#[test]
fn test_self_loop_adjacent() {
    let graph = WeightedGraph::new(2, vec![Edge::new(2, 2, 1.0)]).unwrap();
    assert!(graph.is_adjacent(2, 2).unwrap());
    assert!(!graph.is_adjacent(1, 1).unwrap());
}

// ==================== Matrix Tests ====================

#[test]
fn test_matrix_single_edge() {
    let graph = WeightedGraph::new(3, vec![Edge::new(1, 2, 4.0)]).unwrap();
    let matrix = graph.adjacency_matrix();

    assert_eq!(matrix.len(), 4);
    for (i, row) in matrix.iter().enumerate() {
        assert_eq!(row.len(), 4);
        for (j, &cell) in row.iter().enumerate() {
            if (i, j) == (1, 2) {
                assert_eq!(cell, 4.0);
            } else {
                assert_eq!(cell, 0.0, "cell [{}][{}] should be zero", i, j);
            }
        }
    }
}

#[test]
fn test_matrix_last_write_wins() {
    let edges = vec![Edge::new(1, 2, 3.0), Edge::new(1, 2, 7.0)];
    let graph = WeightedGraph::new(2, edges.clone()).unwrap();
    assert_eq!(graph.adjacency_matrix()[1][2], 7.0);

    let options = GraphOptions::with_order(AdjacencyOrder::Insertion);
    let graph = WeightedGraph::with_options(2, edges, options).unwrap();
    assert_eq!(graph.adjacency_matrix()[1][2], 7.0);
}

#[test]
fn test_matrix_row_and_column_zero_unused() {
    let edges = vec![
        Edge::new(1, 2, 1.0),
        Edge::new(2, 1, 2.0),
        Edge::new(2, 2, 3.0),
    ];
    let matrix = WeightedGraph::new(2, edges).unwrap().adjacency_matrix();
    assert!(matrix[0].iter().all(|&w| w == 0.0));
    assert!(matrix.iter().all(|row| row[0] == 0.0));
    assert_eq!(matrix[2][2], 3.0);
}

#[test]
fn test_matrix_matches_adjacency_random() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 25i64;
    let edges: Vec<Edge> = (0..120)
        .map(|_| {
            Edge::new(
                rng.gen_range(1..=n),
                rng.gen_range(1..=n),
                rng.gen_range(0.5..10.0),
            )
        })
        .collect();
    let graph = WeightedGraph::new(n, edges).unwrap();
    let matrix = graph.adjacency_matrix();

    for i in 1..=n {
        for j in 1..=n {
            let adjacent = graph.is_adjacent(i, j).unwrap();
            assert_eq!(
                matrix[i as usize][j as usize] != 0.0,
                adjacent,
                "matrix and adjacency disagree at [{}][{}]",
                i,
                j
            );
        }
    }
}
