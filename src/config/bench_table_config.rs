// src/config/bench_table_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "bench-output.log";
pub const DEFAULT_SUMMARY_PATH: &str = "bench-summary.md";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const ENV_PREFIX: &str = "BENCHTABLE";

/// Where to read the benchmark log and write the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchTableConfig {
    /// Benchmark log to parse (default: bench-output.log)
    pub input_path: PathBuf,

    /// Markdown summary written by the summary run (default: bench-summary.md)
    pub summary_path: PathBuf,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for BenchTableConfig {
    fn default() -> Self {
        BenchTableConfig {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            summary_path: PathBuf::from(DEFAULT_SUMMARY_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BenchTableConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        // TOML preferred, YAML fallback
        let file = [Path::new("benchtable.toml"), Path::new("benchtable.yaml")]
            .into_iter()
            .find(|path| path.exists());

        Self::build(file, Self::environment())
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_from_file_with(path.as_ref(), Self::environment())
    }

    fn load_from_file_with(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        Self::build(path.exists().then_some(path), environment)
    }

    /// BENCHTABLE_INPUT_PATH, BENCHTABLE_SUMMARY_PATH, BENCHTABLE_LOG_LEVEL
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn build(file: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("input_path", DEFAULT_INPUT_PATH)?
            .set_default("summary_path", DEFAULT_SUMMARY_PATH)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }

        let config = builder.add_source(environment).build()?;
        config.try_deserialize()
    }
}
