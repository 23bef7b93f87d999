//! Line-oriented button scripts.
//!
//! Each line lists button labels separated by whitespace. Blank lines and
//! lines starting with `#` carry no presses.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::controller::{Calculator, View};

/// Counts collected while running a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Lines that carried at least one label.
    pub lines: usize,
    /// Lines that ended with the error indicator on the display.
    pub errors: usize,
}

/// Split one script line into button labels.
///
/// Returns `None` for blank and comment lines.
pub fn parse_line(line: &str) -> Option<Vec<&str>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.split_whitespace().collect())
}

/// Press every label of every line from `reader`, writing the display to
/// `out` after each pressable line.
pub fn run_script<R: BufRead, W: Write>(
    calc: &mut Calculator,
    reader: R,
    mut out: W,
) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("read script line {line_no}"))?;
        let Some(labels) = parse_line(&line) else {
            continue;
        };
        let display = calc.press_all(&labels);
        writeln!(out, "{display}").with_context(|| format!("write display for line {line_no}"))?;
        out.flush().context("flush display")?;

        summary.lines += 1;
        if calc.view() == View::Error {
            summary.errors += 1;
        }
        debug!(line_no, presses = labels.len(), "script line applied");
    }
    Ok(summary)
}
