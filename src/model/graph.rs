//! Graph — a label-keyed map of nodes.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{Edge, Node};
use crate::{Error, Result};

/// A weighted directed graph keyed by node label.
///
/// Invariant: every edge target is a key of `nodes`. Nodes are created
/// only during load; after load the only mutation is the normalize pass
/// rewriting edge weights in place.
///
/// Label matching is case-sensitive by default. When built with
/// `case_sensitive = false`, labels are folded to lowercase at every
/// entry point (load and query), so `"Home"` and `"home"` name the same
/// node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: HashMap<String, Node>,
    case_sensitive: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Graph {
    pub fn new(case_sensitive: bool) -> Self {
        Self { nodes: HashMap::new(), case_sensitive }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Apply the graph's label-folding rule to a raw label.
    pub fn fold_label(&self, raw: &str) -> String {
        if self.case_sensitive { raw.to_string() } else { raw.to_lowercase() }
    }

    /// Register a label, creating an empty node if absent. Folds case.
    pub fn ensure_node(&mut self, label: &str) {
        let key = self.fold_label(label);
        self.nodes.entry(key).or_default();
    }

    /// Append an edge to `source`'s edge list. The source must already
    /// be registered; the loader's first pass guarantees this, so a
    /// miss indicates a corrupted build sequence.
    pub fn add_edge(&mut self, source: &str, edge: Edge) -> Result<()> {
        let key = self.fold_label(source);
        let node = self
            .nodes
            .get_mut(&key)
            .ok_or_else(|| Error::GraphIntegrity { label: key.clone() })?;
        node.push_edge(edge);
        Ok(())
    }

    /// Look up a node by already-folded label.
    pub fn node(&self, label: &str) -> Option<&Node> {
        self.nodes.get(label)
    }

    /// Look up a node together with the graph-owned key, so traversal
    /// can borrow labels from the graph rather than cloning them.
    pub(crate) fn node_entry(&self, label: &str) -> Option<(&str, &Node)> {
        self.nodes.get_key_value(label).map(|(k, n)| (k.as_str(), n))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::out_degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Node)> {
        self.nodes.iter_mut().map(|(k, n)| (k.as_str(), n))
    }
}
