//! Diagnostic log setup.

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::QuizError;
use crate::config::LogConfig;

/// Install the global subscriber when a log file is configured.
///
/// Returns whether a subscriber was installed. `RUST_LOG` takes precedence
/// over the configured level.
pub fn init(config: &LogConfig) -> Result<bool, QuizError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = File::create(path).map_err(|source| QuizError::LogFile {
        path: path.clone(),
        source,
    })?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
