// src/bench_log/record.rs

use serde::{Deserialize, Serialize};

/// One row of the benchmark results table.
///
/// Values are kept exactly as they appear in the log (after trimming),
/// so `"1.20"` stays `"1.20"` and units are never reinterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchRecord {
    pub runtime: String,
    pub min: String,
    pub max: String,
    pub avg: String,
}

impl BenchRecord {
    pub fn new(runtime: &str, min: &str, max: &str, avg: &str) -> Self {
        BenchRecord {
            runtime: runtime.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            avg: avg.to_string(),
        }
    }

    /// Build a record from the leading four fields of a split row.
    /// Returns `None` when fewer than four fields are present; extra fields are ignored.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        match fields {
            [runtime, min, max, avg, ..] => Some(BenchRecord::new(runtime, min, max, avg)),
            _ => None,
        }
    }
}

/// Records in the order they appeared in the log. Duplicate runtimes are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    records: Vec<BenchRecord>,
}

impl ParseResult {
    pub fn new() -> Self {
        ParseResult { records: Vec::new() }
    }

    pub(crate) fn push(&mut self, record: BenchRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BenchRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[BenchRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<BenchRecord> {
        self.records
    }
}

impl From<Vec<BenchRecord>> for ParseResult {
    fn from(records: Vec<BenchRecord>) -> Self {
        ParseResult { records }
    }
}

impl IntoIterator for ParseResult {
    type Item = BenchRecord;
    type IntoIter = std::vec::IntoIter<BenchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseResult {
    type Item = &'a BenchRecord;
    type IntoIter = std::slice::Iter<'a, BenchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
