//! Result formatting — one line per reachable terminal node.

use std::io::Write;

use crate::propagate::TerminalProbs;

/// Write the report, one terminal per line, sorted by label.
///
/// The computation itself guarantees no ordering; sorting here keeps
/// the output deterministic across runs.
pub fn write_report(writer: &mut dyn Write, probs: &TerminalProbs) -> std::io::Result<()> {
    let mut entries: Vec<(&String, &f64)> = probs.iter().collect();
    entries.sort_by_key(|(label, _)| label.as_str());

    for (label, prob) in entries {
        writeln!(
            writer,
            "Termination node \"{label}\" has probability {}% of being reached",
            prob * 100.0
        )?;
    }
    Ok(())
}

/// Render the report to a string.
pub fn render(probs: &TerminalProbs) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, probs).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("report is valid UTF-8")
}
