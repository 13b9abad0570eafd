// src/bin/parse_bench_output.rs

fn main() {
    benchtable::report_cli::run_console();
}
