//! Error types for the weighted digraph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur while building or querying a graph.
///
/// A traversal that finds no path is not an error; it returns `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex count given to the constructor was negative.
    #[error("Vertex count must be non-negative, got {0}")]
    NegativeVertexCount(i64),

    /// Edge endpoint or query vertex outside [1, vertex_count].
    #[error("Vertex {vertex} out of range [1, {vertex_count}]")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Edge text could not be parsed.
    #[error("Invalid edge spec: {0}")]
    InvalidEdgeSpec(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
