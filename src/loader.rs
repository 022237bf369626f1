//! # Graph Loader
//!
//! Builds a [`Graph`] from a line-oriented edge list:
//!
//! ```text
//! SOURCE : WEIGHT : TARGET
//! ```
//!
//! Loading is two-pass: the first pass registers every source and
//! target label as a node, the second appends the edges. This way an
//! edge can reference a target whose own edges appear later (or never,
//! for terminal nodes) without any ordering requirement on the input.
//!
//! All parse validation happens before either pass, so a failed load
//! never yields a partial graph.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::model::{Edge, Graph};
use crate::{Error, Result};

/// Loader configuration.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Whether node labels are matched case-sensitively. The input
    /// format leaves this open; case-sensitive is the documented
    /// default.
    pub case_sensitive: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { case_sensitive: true }
    }
}

/// One validated input line.
#[derive(Debug, PartialEq)]
struct EdgeRecord {
    source: String,
    weight: u64,
    target: String,
}

/// Load a graph from a file on disk.
pub fn load_graph(path: impl AsRef<Path>, options: LoadOptions) -> Result<Graph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(&text, options)?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Build a graph from edge-list text. Blank lines are skipped.
pub fn parse_graph(text: &str, options: LoadOptions) -> Result<Graph> {
    let records = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect::<Result<Vec<_>>>()?;

    let mut graph = Graph::new(options.case_sensitive);

    // Pass 1: register both endpoints of every edge.
    for record in &records {
        graph.ensure_node(&record.source);
        graph.ensure_node(&record.target);
    }

    // Pass 2: append edges to their source nodes.
    for record in records {
        let target = graph.fold_label(&record.target);
        graph.add_edge(&record.source, Edge::new(target, record.weight))?;
    }

    Ok(graph)
}

/// Parse one `SOURCE : WEIGHT : TARGET` line. `line_no` is 1-based.
fn parse_line(line_no: usize, line: &str) -> Result<EdgeRecord> {
    let fields: Vec<&str> = line.split(':').map(str::trim).collect();
    let [source, weight, target] = fields.as_slice() else {
        return Err(Error::MalformedInput {
            line: line_no,
            message: format!(
                "expected 3 colon-separated fields, found {}",
                fields.len()
            ),
        });
    };

    if source.is_empty() || target.is_empty() {
        return Err(Error::MalformedInput {
            line: line_no,
            message: "node label must not be empty".into(),
        });
    }

    let weight: u64 = weight.parse().map_err(|_| Error::MalformedInput {
        line: line_no,
        message: format!("weight {weight:?} is not a non-negative integer"),
    })?;

    Ok(EdgeRecord {
        source: source.to_string(),
        weight,
        target: target.to_string(),
    })
}
