// src/bench_log/parser.rs

use log::{debug, trace};
use crate::bench_log::record::{BenchRecord, ParseResult};

const HEADER_TOKENS: [&str; 2] = ["Runtime", "Min"];
const HEADER_FIRST_FIELD: &str = "Runtime";
const MIN_FIELDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No header line seen yet.
    Seeking,
    /// Header seen; collecting rows until the first blank line.
    InTable,
}

/// Extracts the results table embedded in a benchmark log.
///
/// The table starts after the first line containing both "Runtime" and "Min"
/// (a plain substring check, so prose mentioning both words also triggers it)
/// and ends at the first blank line after that.
pub struct BenchTableParser;

impl BenchTableParser {
    pub fn parse(content: &str) -> ParseResult {
        let mut state = ScanState::Seeking;
        let mut result = ParseResult::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;

            // Checked in both states: a header repeated inside the table is skipped.
            if Self::is_header_trigger(line) {
                trace!("Header trigger on line {}", line_number);
                state = ScanState::InTable;
                continue;
            }

            if state == ScanState::Seeking {
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                trace!("Table closed by blank line {}", line_number);
                break;
            }

            if !trimmed.contains('|') {
                continue;
            }

            match Self::parse_row(trimmed) {
                Some(record) => result.push(record),
                None => debug!("Skipping line {}: {:?}", line_number, trimmed),
            }
        }

        result
    }

    fn is_header_trigger(line: &str) -> bool {
        HEADER_TOKENS.iter().all(|token| line.contains(token))
    }

    /// Split a candidate row on `|`, dropping empty segments.
    /// Rejects rows with fewer than four fields and repeated header rows.
    fn parse_row(line: &str) -> Option<BenchRecord> {
        let fields: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect();

        if fields.len() < MIN_FIELDS || fields[0] == HEADER_FIRST_FIELD {
            return None;
        }

        BenchRecord::from_fields(&fields)
    }
}
