//! All data types for the weighted digraph library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// External vertex identifier. Valid vertices are `1..=vertex_count`.
pub type VertexId = i64;

/// Index 0 is allocated but never holds edges, so ids match bucket indices.
pub const RESERVED_VERTEX: VertexId = 0;

/// Weight used when an edge spec omits one.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;
