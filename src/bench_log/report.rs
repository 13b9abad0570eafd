// src/bench_log/report.rs

use log::info;
use std::fs;
use std::path::Path;
use crate::bench_log::error::{BenchTableError, Result};
use crate::bench_log::parser::BenchTableParser;
use crate::bench_log::record::ParseResult;
use crate::bench_log::render::{render_console, render_markdown};
use crate::config::BenchTableConfig;

/// Read and parse a benchmark log. A missing file is `MissingInputFile`.
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<ParseResult> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| BenchTableError::from_read(path.to_path_buf(), e))?;

    let result = BenchTableParser::parse(&content);
    info!("Parsed {} benchmark records from {}", result.len(), path.display());
    Ok(result)
}

/// Console run: the text to print for the configured log.
pub fn console_report(config: &BenchTableConfig) -> Result<String> {
    let result = load_results(&config.input_path)?;
    Ok(render_console(&result))
}

/// Summary run: writes the markdown summary (replacing any existing file)
/// and returns the console table to print, or `None` when no records were found.
pub fn summary_report(config: &BenchTableConfig) -> Result<Option<String>> {
    let result = load_results(&config.input_path)?;

    write_summary(&config.summary_path, &render_markdown(&result))?;
    info!("Summary written to {}", config.summary_path.display());

    if result.is_empty() {
        Ok(None)
    } else {
        Ok(Some(render_console(&result)))
    }
}

fn write_summary(path: &Path, markdown: &str) -> Result<()> {
    fs::write(path, markdown).map_err(|source| BenchTableError::Write {
        path: path.to_path_buf(),
        source,
    })
}
