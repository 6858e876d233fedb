//! The core edge struct.

use std::str::FromStr;

use serde::Serialize;

use super::{GraphError, VertexId, DEFAULT_EDGE_WEIGHT};

/// A directed, weighted connection between two vertices.
///
/// Two edges are equal when start, end and weight all match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Vertex the edge leaves from.
    pub start: VertexId,
    /// Vertex the edge points to.
    pub end: VertexId,
    /// Edge weight. Traversals ignore it.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(start: VertexId, end: VertexId, weight: f64) -> Self {
        Self { start, end, weight }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.start, self.end, self.weight)
    }
}

/// Parses `START,END[,WEIGHT]`. `:` is accepted in place of `,`.
impl FromStr for Edge {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GraphError::InvalidEdgeSpec(s.to_string());
        let parts: Vec<&str> = s.split([',', ':']).map(str::trim).collect();

        let (start, end, weight) = match parts.as_slice() {
            [start, end] => (*start, *end, None),
            [start, end, weight] => (*start, *end, Some(*weight)),
            _ => return Err(invalid()),
        };

        let start: VertexId = start.parse().map_err(|_| invalid())?;
        let end: VertexId = end.parse().map_err(|_| invalid())?;
        let weight = match weight {
            Some(w) => w.parse::<f64>().map_err(|_| invalid())?,
            None => DEFAULT_EDGE_WEIGHT,
        };

        Ok(Edge::new(start, end, weight))
    }
}
