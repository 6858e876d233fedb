//! Weighted directed graph over vertices `1..=N`.
//!
//! Built once from an edge list, then queried for adjacency, exported as a
//! dense weight matrix, or searched for unweighted paths with BFS or DFS.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs_path, dfs_path, AdjacencyOrder, GraphBuilder, GraphOptions, Traversal, WeightedGraph,
};
pub use types::{Edge, GraphError, GraphResult, VertexId, DEFAULT_EDGE_WEIGHT, RESERVED_VERTEX};
