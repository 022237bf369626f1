//! Edge — a weighted directed connection to a target node.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Outgoing edges of a node. Most nodes have small out-degree, so the
/// first few edges live inline.
pub type EdgeList = SmallVec<[Edge; 4]>;

/// A directed edge owned by its source node.
///
/// `weight` holds the raw non-negative integer multiplicity at load
/// time and is rewritten in place to a selection probability in [0, 1]
/// by [`crate::normalize::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Label of the node this edge leads to. Always a key of the graph.
    pub target: String,
    pub weight: f64,
}

impl Edge {
    pub fn new(target: impl Into<String>, weight: u64) -> Self {
        Self { target: target.into(), weight: weight as f64 }
    }
}
