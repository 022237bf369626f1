//! reachprob CLI — single-shot terminal-reach probability query.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use reachprob::{LoadOptions, loader, normalize, propagate, report};

/// Compute the probability of reaching each terminal node of a weighted
/// directed graph from a start node.
///
/// The graph file holds one edge per line as `SOURCE : WEIGHT : TARGET`,
/// where WEIGHT is a non-negative integer. Node labels are
/// case-sensitive. Cyclic graphs are rejected.
#[derive(Parser)]
#[command(name = "reachprob")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal-reach probabilities for weighted directed graphs", long_about = None)]
struct Cli {
    /// Path to the edge-list graph description
    file: PathBuf,

    /// Label of the start node to query
    start: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut graph = loader::load_graph(&cli.file, LoadOptions::default())?;
    normalize::normalize(&mut graph)?;
    let probs = propagate::terminal_probabilities(&graph, &cli.start)?;

    print!("{}", report::render(&probs));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clap_parses_two_positionals() {
        let cli = Cli::try_parse_from(["reachprob", "graph.txt", "home"]).expect("parse");
        assert_eq!(cli.file, PathBuf::from("graph.txt"));
        assert_eq!(cli.start, "home");
    }

    #[test]
    fn clap_rejects_wrong_argument_count() {
        assert!(Cli::try_parse_from(["reachprob"]).is_err());
        assert!(Cli::try_parse_from(["reachprob", "graph.txt"]).is_err());
        assert!(Cli::try_parse_from(["reachprob", "graph.txt", "home", "extra"]).is_err());
    }
}
