// src/bin/parse_bench_summary.rs

fn main() {
    benchtable::report_cli::run_summary();
}
