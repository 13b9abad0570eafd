// src/bench_log/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a benchmark log or writing its summary.
///
/// A log with no table, or a table with no usable rows, is not an error:
/// it parses to an empty result and renders the "no results" output.
#[derive(Debug, Error)]
pub enum BenchTableError {
    #[error("Benchmark log not found: {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl BenchTableError {
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            BenchTableError::MissingInputFile { path }
        } else {
            BenchTableError::Read { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_missing_input() {
        let err = BenchTableError::from_read(
            PathBuf::from("bench-output.log"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, BenchTableError::MissingInputFile { .. }));
        assert_eq!(err.to_string(), "Benchmark log not found: bench-output.log");
    }

    #[test]
    fn test_other_read_errors_keep_source() {
        let err = BenchTableError::from_read(
            PathBuf::from("bench-output.log"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, BenchTableError::Read { .. }));
        assert_eq!(err.to_string(), "Failed to read bench-output.log: denied");
    }
}
