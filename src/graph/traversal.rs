//! Graph traversal algorithms (BFS, DFS) with parent-pointer path recovery.

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::{Edge, GraphResult, VertexId};

use super::WeightedGraph;

/// Which traversal to run when searching for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Breadth-first: FIFO edge frontier, fewest edges.
    Bfs,
    /// Depth-first: LIFO edge frontier.
    Dfs,
}

impl Traversal {
    /// Return a human-readable name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Parse a traversal from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" => Some(Self::Bfs),
            "dfs" | "depth_first" => Some(Self::Dfs),
            _ => None,
        }
    }

    /// Run this traversal from `start` to `end`.
    pub fn find_path(
        &self,
        graph: &WeightedGraph,
        start: VertexId,
        end: VertexId,
    ) -> GraphResult<Option<Vec<VertexId>>> {
        match self {
            Self::Bfs => bfs_path(graph, start, end),
            Self::Dfs => dfs_path(graph, start, end),
        }
    }
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Breadth-first search over edges.
///
/// The frontier is seeded with every outgoing edge of `start`. Each popped
/// edge whose target is unvisited records its start as the target's parent;
/// if the target is `end` the search stops, otherwise the target is marked
/// visited and all of its outgoing edges are appended in bucket order.
///
/// Returns `Ok(None)` when `end` is unreachable and `Ok(Some(vec![start]))`
/// when `start == end`. Both vertices are range-checked first.
pub fn bfs_path(
    graph: &WeightedGraph,
    start: VertexId,
    end: VertexId,
) -> GraphResult<Option<Vec<VertexId>>> {
    let start_idx = graph.index(start)?;
    let end_idx = graph.index(end)?;
    if start_idx == end_idx {
        return Ok(Some(vec![start]));
    }

    let mut visited = vec![false; graph.slots()];
    let mut parents: Vec<Option<usize>> = vec![None; graph.slots()];
    let mut frontier: VecDeque<Edge> = graph.bucket(start_idx).iter().copied().collect();
    visited[start_idx] = true;

    while let Some(edge) = frontier.pop_front() {
        let target = edge.end as usize;
        if visited[target] {
            continue;
        }
        parents[target] = Some(edge.start as usize);
        if target == end_idx {
            let path = reconstruct_path(&parents, end_idx);
            log::debug!("bfs {} -> {}: found path of {} vertices", start, end, path.len());
            return Ok(Some(path));
        }

        visited[target] = true;
        log::trace!("bfs expanding vertex {}", target);
        frontier.extend(graph.bucket(target).iter().copied());
    }

    log::debug!("bfs {} -> {}: no path", start, end);
    Ok(None)
}

/// Depth-first search over edges.
///
/// Each bucket is pushed in reverse so its first edge sits on top of the
/// stack and is explored first. When a vertex is expanded only edges to
/// still-unvisited targets are pushed. Otherwise identical to [`bfs_path`].
pub fn dfs_path(
    graph: &WeightedGraph,
    start: VertexId,
    end: VertexId,
) -> GraphResult<Option<Vec<VertexId>>> {
    let start_idx = graph.index(start)?;
    let end_idx = graph.index(end)?;
    if start_idx == end_idx {
        return Ok(Some(vec![start]));
    }

    let mut visited = vec![false; graph.slots()];
    let mut parents: Vec<Option<usize>> = vec![None; graph.slots()];
    let mut frontier: Vec<Edge> = graph.bucket(start_idx).iter().rev().copied().collect();
    visited[start_idx] = true;

    while let Some(edge) = frontier.pop() {
        let target = edge.end as usize;
        if visited[target] {
            continue;
        }
        parents[target] = Some(edge.start as usize);
        if target == end_idx {
            let path = reconstruct_path(&parents, end_idx);
            log::debug!("dfs {} -> {}: found path of {} vertices", start, end, path.len());
            return Ok(Some(path));
        }

        visited[target] = true;
        log::trace!("dfs expanding vertex {}", target);
        frontier.extend(
            graph
                .bucket(target)
                .iter()
                .rev()
                .filter(|e| !visited[e.end as usize])
                .copied(),
        );
    }

    log::debug!("dfs {} -> {}: no path", start, end);
    Ok(None)
}

/// Walk parent pointers from `end` until a vertex with no parent, then
/// reverse so the path runs start to end.
fn reconstruct_path(parents: &[Option<usize>], end: usize) -> Vec<VertexId> {
    let mut path = vec![end as VertexId];
    let mut current = end;
    while let Some(parent) = parents[current] {
        path.push(parent as VertexId);
        current = parent;
    }
    path.reverse();
    path
}
