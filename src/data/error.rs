//! Errors raised while resolving a question set.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a question source could not be used.
///
/// None of these reach the user: the resolver logs them and switches to the
/// built-in set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("question payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no data received from the question source")]
    EmptyPayload,
    #[error("question payload is neither a list nor an object")]
    NotACollection,
    #[error("question source contains no questions")]
    NoQuestions,
    #[error("invalid question at position {index}: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}
