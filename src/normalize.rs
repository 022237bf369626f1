//! # Weight Normalizer
//!
//! Rewrites each node's raw integer edge weights, in place, into a
//! probability distribution over its outgoing edges: each weight
//! becomes `w / S` where S is the node's total outgoing weight.
//!
//! Terminal nodes are skipped. A non-terminal node whose weights sum to
//! zero has no valid distribution and fails with
//! [`Error::InvalidWeight`] instead of producing NaN.

use tracing::debug;

use crate::model::Graph;
use crate::{Error, Result};

/// Normalize every node's outgoing weights into probabilities.
///
/// Runs in O(V + E). After this returns `Ok`, the weights of each
/// non-terminal node sum to 1.0 up to floating-point rounding.
pub fn normalize(graph: &mut Graph) -> Result<()> {
    let mut normalized = 0usize;

    for (label, node) in graph.iter_mut() {
        if node.is_terminal() {
            continue;
        }

        // Raw weights are integers, so the sum is exact.
        let total: f64 = node.edges.iter().map(|e| e.weight).sum();
        if total == 0.0 {
            return Err(Error::InvalidWeight { label: label.to_string() });
        }

        for edge in &mut node.edges {
            edge.weight /= total;
        }
        normalized += 1;
    }

    debug!(nodes = normalized, "edge weights normalized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{LoadOptions, parse_graph};

    fn load(text: &str) -> Graph {
        parse_graph(text, LoadOptions::default()).unwrap()
    }

    #[test]
    fn weights_become_a_distribution() {
        let mut graph = load("a:2:b\na:1:c\na:1:d\n");
        normalize(&mut graph).unwrap();

        let weights: Vec<f64> = graph.node("a").unwrap().edges.iter().map(|e| e.weight).collect();
        assert_eq!(weights, [0.5, 0.25, 0.25]);

        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn terminal_nodes_are_skipped() {
        let mut graph = load("a:1:b\n");
        normalize(&mut graph).unwrap();
        assert!(graph.node("b").unwrap().is_terminal());
    }

    #[test]
    fn zero_total_weight_fails() {
        let mut graph = load("a:0:b\na:0:c\n");
        let err = normalize(&mut graph).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { label } if label == "a"));
    }

    #[test]
    fn zero_weight_edge_among_positive_siblings_is_fine() {
        let mut graph = load("a:0:b\na:4:c\n");
        normalize(&mut graph).unwrap();
        let weights: Vec<f64> = graph.node("a").unwrap().edges.iter().map(|e| e.weight).collect();
        assert_eq!(weights, [0.0, 1.0]);
    }
}
