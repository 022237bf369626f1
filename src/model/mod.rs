//! # Graph Model
//!
//! Plain data types for the weighted directed graph. These cross every
//! boundary: loader ↔ normalizer ↔ propagator ↔ report.
//!
//! Design rule: this module is pure data — no I/O, no traversal state.
//! Cycle-detection bookkeeping lives in the propagator, not here.

pub mod edge;
pub mod graph;
pub mod node;

pub use edge::{Edge, EdgeList};
pub use graph::Graph;
pub use node::Node;
