// src/report_cli.rs
// Shared entry points for the parse-bench-* binaries

use env_logger::Env;
use log::{debug, error};
use std::process;
use crate::bench_log::{console_report, summary_report, Result};
use crate::config::BenchTableConfig;

/// Print the console table for the configured benchmark log.
pub fn run_console() {
    let config = init();
    exit_on_error(console_report(&config).map(|table| print!("{}", table)));
}

/// Write the markdown summary and echo the console table when rows were found.
pub fn run_summary() {
    let config = init();
    exit_on_error(summary_report(&config).map(|table| {
        if let Some(table) = table {
            print!("{}", table);
        }
    }));
}

fn init() -> BenchTableConfig {
    let loaded = BenchTableConfig::load();
    let level = loaded
        .as_ref()
        .map(|config| config.log_level.clone())
        .unwrap_or_else(|_| BenchTableConfig::default().log_level);

    // Logs go to stderr; stdout carries only the table
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match loaded {
        Ok(config) => {
            debug!("Using configuration: {:?}", config);
            config
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn exit_on_error(outcome: Result<()>) {
    if let Err(e) = outcome {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
