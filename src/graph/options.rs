//! Construction options.

use serde::Serialize;

/// How each vertex's outgoing edges are ordered after construction.
///
/// Traversals expand buckets in this order, so it decides which of several
/// equally short paths is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyOrder {
    /// Stable-sorted by target vertex, smallest first.
    #[default]
    ByTarget,
    /// First-seen order from the input edge list.
    Insertion,
}

impl AdjacencyOrder {
    /// Return a human-readable name for this ordering.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ByTarget => "by_target",
            Self::Insertion => "insertion",
        }
    }
}

impl std::fmt::Display for AdjacencyOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options applied when a graph is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Ordering applied to each vertex's outgoing edges.
    pub order: AdjacencyOrder,
}

impl GraphOptions {
    /// Options with the given adjacency ordering.
    pub fn with_order(order: AdjacencyOrder) -> Self {
        Self { order }
    }
}
