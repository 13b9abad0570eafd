// src/config/mod.rs

pub mod bench_table_config;

// Re-export main types for convenience
pub use bench_table_config::BenchTableConfig;
