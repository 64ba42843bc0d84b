//! Analyzer configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default execution budget: generous for a snippet analyzer that never
/// iterates.
pub const DEFAULT_MAX_EXECUTION_TIME: Duration = Duration::from_secs(5);

/// Tunables for the analyzer.
///
/// `max_execution_time` is advisory: no construct executor iterates, so
/// nothing inside a run checks the clock. Callers that need a hard
/// deadline must wrap the `analyze()` call externally.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Advisory execution budget for one run.
    pub max_execution_time: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_execution_time: DEFAULT_MAX_EXECUTION_TIME,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    analyzer: AnalyzerSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct AnalyzerSection {
    max_execution_time_ms: u64,
}

impl Default for AnalyzerSection {
    fn default() -> Self {
        Self {
            max_execution_time_ms: DEFAULT_MAX_EXECUTION_TIME.as_millis() as u64,
        }
    }
}

impl AnalyzerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// ```toml
    /// [analyzer]
    /// max_execution_time_ms = 5000
    /// ```
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            max_execution_time: Duration::from_millis(file.analyzer.max_execution_time_ms),
        })
    }
}
