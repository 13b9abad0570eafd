// src/bench_log/render.rs

use std::fmt::Write as _;
use crate::bench_log::record::ParseResult;

const RUNTIME_WIDTH: usize = 7;
const VALUE_WIDTH: usize = 5;

pub const NO_RESULTS_MESSAGE: &str = "No benchmark results found";
pub const MARKDOWN_HEADING: &str = "## Performance Benchmarks";

/// Fixed-width table for the terminal.
///
/// Runtime is left-justified to 7 columns and the timings to 5. Longer
/// values are written in full and push the column out. An empty result
/// renders the single "no results" line instead.
pub fn render_console(result: &ParseResult) -> String {
    if result.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    let mut output = String::new();
    output.push('\n');
    output.push_str("| Runtime | Min   | Max   | Avg   |\n");
    output.push_str("|---------|-------|-------|-------|\n");

    for record in result {
        let _ = writeln!(
            output,
            "| {:<rw$} | {:<vw$} | {:<vw$} | {:<vw$} |",
            record.runtime,
            record.min,
            record.max,
            record.avg,
            rw = RUNTIME_WIDTH,
            vw = VALUE_WIDTH,
        );
    }

    let _ = writeln!(output, "\nTotal: {} runtimes tested", result.len());
    output
}

/// Markdown section for a summary file.
///
/// Always emits the heading, header and separator rows, even with zero records.
pub fn render_markdown(result: &ParseResult) -> String {
    let mut output = String::new();
    let _ = write!(output, "\n{}\n\n", MARKDOWN_HEADING);
    output.push_str("| Runtime | Min | Max | Avg |\n");
    output.push_str("|--------|-----|-----|-----|\n");

    for record in result {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} |",
            record.runtime, record.min, record.max, record.avg
        );
    }

    let _ = writeln!(output, "\n**Total runtimes tested:** {}", result.len());
    output
}
