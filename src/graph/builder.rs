//! Fluent API for building WeightedGraph instances.

use crate::types::{Edge, GraphResult, VertexId};

use super::options::{AdjacencyOrder, GraphOptions};
use super::WeightedGraph;

/// Fluent builder for constructing a WeightedGraph.
pub struct GraphBuilder {
    vertex_count: i64,
    edges: Vec<Edge>,
    options: GraphOptions,
}

impl GraphBuilder {
    /// Create a new builder for `vertex_count` vertices.
    pub fn new(vertex_count: i64) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            options: GraphOptions::default(),
        }
    }

    /// Add an edge `start -> end`.
    pub fn edge(&mut self, start: VertexId, end: VertexId, weight: f64) -> &mut Self {
        self.edges.push(Edge::new(start, end, weight));
        self
    }

    /// Add several edges, keeping their order.
    pub fn edges(&mut self, edges: impl IntoIterator<Item = Edge>) -> &mut Self {
        self.edges.extend(edges);
        self
    }

    /// Set the adjacency ordering.
    pub fn order(&mut self, order: AdjacencyOrder) -> &mut Self {
        self.options.order = order;
        self
    }

    /// Build the final WeightedGraph. Validation happens here.
    pub fn build(self) -> GraphResult<WeightedGraph> {
        WeightedGraph::with_options(self.vertex_count, self.edges, self.options)
    }
}
