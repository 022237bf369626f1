//! # Path Probability Propagator
//!
//! Depth-first traversal from a start node over a normalized graph,
//! multiplying edge probabilities along the way and accumulating the
//! running product at each terminal node it reaches. Because the
//! probabilities at every branch point partition the outgoing mass, the
//! accumulated values sum to 1.0 for any acyclic graph in which every
//! reachable node eventually reaches a terminal.
//!
//! Cycle detection uses a set of labels on the active path, local to
//! each call. A node is removed from the set when its branch unwinds,
//! so sibling branches may revisit shared DAG substructure; re-entering
//! a node still on the path is a cycle and fails the whole query.
//!
//! The traversal is tree-shaped over a DAG, with no memoization of
//! sub-results: total work is bounded by the number of distinct
//! root-to-terminal paths, which can be exponential for DAGs with heavy
//! fan-in.

use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::model::{Graph, Node};
use crate::{Error, Result};

/// Terminal-node label → accumulated probability of reaching it.
pub type TerminalProbs = HashMap<String, f64>;

/// Compute the probability of reaching each terminal node from `start`.
///
/// Requires a graph whose weights have been normalized by
/// [`crate::normalize::normalize`]. The start label is folded per the
/// graph's case rule before lookup.
pub fn terminal_probabilities(graph: &Graph, start: &str) -> Result<TerminalProbs> {
    let folded = graph.fold_label(start);
    let (label, node) = graph
        .node_entry(&folded)
        .ok_or_else(|| Error::NodeNotFound { label: folded.clone() })?;

    let mut probs = TerminalProbs::new();
    let mut active: HashSet<&str> = HashSet::new();
    active.insert(label);
    visit(graph, label, node, 1.0, &mut active, &mut probs)?;

    debug!(start = label, terminals = probs.len(), "propagation complete");
    Ok(probs)
}

fn visit<'g>(
    graph: &'g Graph,
    label: &'g str,
    node: &'g Node,
    count: f64,
    active: &mut HashSet<&'g str>,
    probs: &mut TerminalProbs,
) -> Result<()> {
    if node.is_terminal() {
        *probs.entry(label.to_string()).or_insert(0.0) += count;
        return Ok(());
    }

    for edge in &node.edges {
        let (target_label, target_node) = graph
            .node_entry(&edge.target)
            .ok_or_else(|| Error::GraphIntegrity { label: edge.target.clone() })?;

        // Already on the active path: the graph has a cycle.
        if !active.insert(target_label) {
            return Err(Error::CycleDetected { label: target_label.to_string() });
        }
        visit(graph, target_label, target_node, count * edge.weight, active, probs)?;
        active.remove(target_label);
    }

    Ok(())
}
