// src/bench_log/mod.rs

pub mod error;
pub mod record;
pub mod parser;
pub mod render;
pub mod report;

pub use error::{BenchTableError, Result};
pub use record::{BenchRecord, ParseResult};
pub use parser::BenchTableParser;
pub use render::{render_console, render_markdown};
pub use report::{console_report, load_results, summary_report};
