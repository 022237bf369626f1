//! # reachprob — Terminal-Reach Probability for Weighted Directed Graphs
//!
//! Parses a weighted directed graph from a line-oriented edge list,
//! normalizes each node's outgoing weights into a probability
//! distribution, and computes the probability of eventually reaching
//! each terminal node (a node with no outgoing edges) from a queried
//! start node by following weighted-random paths.
//!
//! ## Design Principles
//!
//! 1. **Pure model**: `Graph`, `Node`, `Edge` are plain data — no I/O, no state
//! 2. **Staged pipeline**: load → normalize → propagate, each stage a function
//! 3. **Traversal owns its state**: cycle detection uses a visited set local
//!    to each query, never a marker embedded in the graph
//! 4. **Closed error taxonomy**: every failure maps to a named `Error` variant
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reachprob::{loader, normalize, propagate, LoadOptions};
//!
//! # fn example() -> reachprob::Result<()> {
//! let mut graph = loader::load_graph("routes.txt", LoadOptions::default())?;
//! normalize::normalize(&mut graph)?;
//! let probs = propagate::terminal_probabilities(&graph, "START")?;
//!
//! for (label, p) in &probs {
//!     println!("{label}: {}%", p * 100.0);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Input Format
//!
//! One directed edge per line, three colon-separated fields:
//!
//! ```text
//! SOURCE : WEIGHT : TARGET
//! ```
//!
//! Labels are arbitrary trimmed strings (case-sensitive by default);
//! WEIGHT is a non-negative integer proportional to the likelihood of
//! selecting that edge among its siblings. Cyclic graphs are rejected
//! at query time.

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod loader;
pub mod normalize;
pub mod propagate;
pub mod report;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Edge, EdgeList, Graph, Node};

// ============================================================================
// Re-exports: Pipeline
// ============================================================================

pub use loader::{LoadOptions, load_graph};
pub use normalize::normalize;
pub use propagate::{TerminalProbs, terminal_probabilities};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open graph file {path}: {source}")]
    FileAccess {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("edge references unregistered node \"{label}\"")]
    GraphIntegrity { label: String },

    #[error("node \"{label}\" has outgoing edges but zero total weight")]
    InvalidWeight { label: String },

    #[error("start node \"{label}\" not found in graph")]
    NodeNotFound { label: String },

    #[error("cycle detected at node \"{label}\": graph must be acyclic")]
    CycleDetected { label: String },
}

pub type Result<T> = std::result::Result<T, Error>;
