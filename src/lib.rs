// src/lib.rs

pub mod bench_log;
pub mod config;
pub mod report_cli;

pub use bench_log::{
    BenchRecord, BenchTableError, BenchTableParser, ParseResult, render_console, render_markdown,
};
pub use config::BenchTableConfig;
