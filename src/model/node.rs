//! Node in the weighted directed graph.

use serde::{Deserialize, Serialize};
use super::{Edge, EdgeList};

/// A node in the graph. Its label is the graph map key, not stored here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Outgoing edges in input order. Order is preserved because the
    /// propagator visits edges in stored order.
    pub edges: EdgeList,
}

impl Node {
    pub fn new() -> Self {
        Self { edges: EdgeList::new() }
    }

    /// A terminal node has no outgoing edges; traversal stops here.
    pub fn is_terminal(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}
