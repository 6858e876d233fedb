//! Core graph structure — per-vertex outgoing edge lists.

use crate::types::{Edge, GraphError, GraphResult, VertexId};

use super::options::{AdjacencyOrder, GraphOptions};
use super::traversal;

/// An immutable weighted directed graph over vertices `1..=vertex_count`.
pub struct WeightedGraph {
    /// Outgoing edges, indexed by vertex id. Bucket 0 is always empty.
    buckets: Vec<Vec<Edge>>,
    /// Number of edges kept after deduplication.
    edge_count: usize,
    /// Ordering applied to every bucket.
    order: AdjacencyOrder,
}

impl WeightedGraph {
    /// Build a graph with default options (buckets sorted by target).
    pub fn new(vertex_count: i64, edges: Vec<Edge>) -> GraphResult<Self> {
        Self::with_options(vertex_count, edges, GraphOptions::default())
    }

    /// Build a graph from an edge list.
    ///
    /// Edges are appended to their start vertex's bucket in input order; an
    /// edge equal to one already in the bucket is dropped. Every endpoint is
    /// range-checked before anything is stored.
    pub fn with_options(
        vertex_count: i64,
        edges: impl IntoIterator<Item = Edge>,
        options: GraphOptions,
    ) -> GraphResult<Self> {
        let vertex_count = usize::try_from(vertex_count)
            .map_err(|_| GraphError::NegativeVertexCount(vertex_count))?;

        let mut buckets: Vec<Vec<Edge>> = vec![Vec::new(); vertex_count + 1];
        let mut edge_count = 0;
        let mut dropped = 0;

        for edge in edges {
            let source = vertex_index(edge.start, vertex_count)?;
            vertex_index(edge.end, vertex_count)?;

            let bucket = &mut buckets[source];
            if bucket.contains(&edge) {
                dropped += 1;
                continue;
            }
            bucket.push(edge);
            edge_count += 1;
        }

        if options.order == AdjacencyOrder::ByTarget {
            // Stable: equal targets keep insertion order.
            for bucket in &mut buckets {
                bucket.sort_by_key(|e| e.end);
            }
        }

        log::debug!(
            "Built graph: {} vertices, {} edges ({} duplicates dropped), order={}",
            vertex_count,
            edge_count,
            dropped,
            options.order
        );

        Ok(Self {
            buckets,
            edge_count,
            order: options.order,
        })
    }

    /// Number of vertices (excluding the reserved vertex 0).
    pub fn vertex_count(&self) -> usize {
        self.buckets.len() - 1
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Ordering applied to the outgoing edge lists.
    pub fn order(&self) -> AdjacencyOrder {
        self.order
    }

    /// Get all edges leaving a vertex.
    pub fn edges_from(&self, vertex: VertexId) -> GraphResult<&[Edge]> {
        let idx = self.index(vertex)?;
        Ok(self.buckets[idx].as_slice())
    }

    /// Iterate every edge, grouped by start vertex in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.buckets.iter().flatten()
    }

    /// True iff some edge `start -> end` exists.
    pub fn is_adjacent(&self, start: VertexId, end: VertexId) -> GraphResult<bool> {
        let idx = self.index(start)?;
        self.index(end)?;
        Ok(self.buckets[idx].iter().any(|e| e.end == end))
    }

    /// Dense `(N+1) x (N+1)` weight matrix; row and column 0 stay zero.
    ///
    /// When several edges join the same pair with different weights, the
    /// cell holds the weight of the last one in bucket order.
    pub fn adjacency_matrix(&self) -> Vec<Vec<f64>> {
        let size = self.buckets.len();
        let mut matrix = vec![vec![0.0; size]; size];
        for (row, bucket) in self.buckets.iter().enumerate() {
            for edge in bucket {
                // Endpoints were range-checked at construction.
                matrix[row][edge.end as usize] = edge.weight;
            }
        }
        matrix
    }

    /// Breadth-first path from `start` to `end`. See [`traversal::bfs_path`].
    pub fn bfs_path(&self, start: VertexId, end: VertexId) -> GraphResult<Option<Vec<VertexId>>> {
        traversal::bfs_path(self, start, end)
    }

    /// Depth-first path from `start` to `end`. See [`traversal::dfs_path`].
    pub fn dfs_path(&self, start: VertexId, end: VertexId) -> GraphResult<Option<Vec<VertexId>>> {
        traversal::dfs_path(self, start, end)
    }

    /// Range-check a vertex and return its bucket index.
    pub(crate) fn index(&self, vertex: VertexId) -> GraphResult<usize> {
        vertex_index(vertex, self.vertex_count())
    }

    /// Outgoing edges by already-validated index.
    pub(crate) fn bucket(&self, idx: usize) -> &[Edge] {
        &self.buckets[idx]
    }

    /// Size of per-traversal state arrays (vertex_count + 1).
    pub(crate) fn slots(&self) -> usize {
        self.buckets.len()
    }
}

fn vertex_index(vertex: VertexId, vertex_count: usize) -> GraphResult<usize> {
    match usize::try_from(vertex) {
        Ok(idx) if idx >= 1 && idx <= vertex_count => Ok(idx),
        _ => Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        }),
    }
}
