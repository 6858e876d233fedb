//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod options;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use options::{AdjacencyOrder, GraphOptions};
pub use traversal::{bfs_path, dfs_path, Traversal};
pub use weighted_graph::WeightedGraph;
