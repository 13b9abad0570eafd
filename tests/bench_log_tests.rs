// tests/bench_log_tests.rs

use benchtable::{render_console, render_markdown, BenchRecord, BenchTableParser};

const SAMPLE_LOG: &str = "\
> bench
> node scripts/bench.js

Benchmarking 4 runtimes (10 iterations each)
Runtime comparison (ms) - Min/Max/Avg

| Runtime | Min   | Max   | Avg   |
|---------|-------|-------|-------|
| node    | 41.2  | 55.0  | 44.8  |
| bun     | 12.9  | 18.3  | 14.1  |
| deno    | 30.4  | 39.9  | 33.0  |
| go      | 1.2   | 5.6   | 3.1   |

| late    | 0     | 0     | 0     |
";

#[cfg(test)]
mod bench_log_tests {
    use super::*;

    #[test]
    fn test_prose_trigger_closes_early() {
        // The prose line mentions Runtime and Min, so the table starts there.
        // The blank line after it then closes the table before the real header.
        let result = BenchTableParser::parse(SAMPLE_LOG);
        assert!(result.is_empty(), "prose trigger followed by a blank line yields no rows");
    }

    #[test]
    fn test_log_with_single_trigger() {
        let log = SAMPLE_LOG.replace("Runtime comparison (ms) - Min/Max/Avg\n", "");
        let result = BenchTableParser::parse(&log);

        // The markdown separator row has four non-empty fields and is kept.
        let expected = vec![
            BenchRecord::new("---------", "-------", "-------", "-------"),
            BenchRecord::new("node", "41.2", "55.0", "44.8"),
            BenchRecord::new("bun", "12.9", "18.3", "14.1"),
            BenchRecord::new("deno", "30.4", "39.9", "33.0"),
            BenchRecord::new("go", "1.2", "5.6", "3.1"),
        ];
        assert_eq!(result.records(), expected.as_slice());
    }

    #[test]
    fn test_pipe_rows_before_header_are_ignored() {
        let log = "| early | 1 | 2 | 3 |\nRuntime | Min | Max | Avg\n| go | 1 | 5 | 3 |\n";
        let runtimes: Vec<String> = BenchTableParser::parse(log)
            .into_iter()
            .map(|r| r.runtime)
            .collect();
        assert_eq!(runtimes, vec!["go"]);
    }

    #[test]
    fn test_renderers_agree_on_count() {
        let log = "Runtime Min\n| go | 1 | 5 | 3 |\n| rust | 1 | 2 | 1 |\n";
        let result = BenchTableParser::parse(log);

        assert!(render_console(&result).ends_with("\nTotal: 2 runtimes tested\n"));
        assert!(render_markdown(&result).ends_with("\n**Total runtimes tested:** 2\n"));
    }

    #[test]
    fn test_empty_input() {
        let result = BenchTableParser::parse("");
        assert!(result.is_empty());
        assert_eq!(render_console(&result), "No benchmark results found\n");
    }
}
