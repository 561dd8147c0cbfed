//! Runtime configuration for the quiz.

use std::path::PathBuf;
use std::time::Duration;

/// Endpoint queried when no other source is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.jsonserve.com/Uw5CrX";

/// Transport timeout for the startup request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Where the question set is resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    /// A single HTTP GET returning JSON.
    Remote { endpoint: String },
    /// A local JSON document with the same shape as the remote payload.
    File(PathBuf),
}

impl Default for QuestionSource {
    fn default() -> Self {
        Self::Remote {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Diagnostics are written here. Without a file nothing is recorded, since
    /// the terminal belongs to the UI.
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: QuestionSource,
    pub timeout: Duration,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: QuestionSource::default(),
            timeout: DEFAULT_TIMEOUT,
            log: LogConfig::default(),
        }
    }
}
