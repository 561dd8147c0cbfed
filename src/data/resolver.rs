//! One-shot resolution of the question set with fallback to the built-in data.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::error::ResolveError;
use super::payload::parse_questions;
use super::set::{Origin, QuestionSet};
use crate::config::{Config, QuestionSource};
use crate::models::Question;

const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone)]
pub struct Resolver {
    source: QuestionSource,
    timeout: Duration,
}

impl Resolver {
    pub fn new(source: QuestionSource, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.source.clone(), config.timeout)
    }

    /// Resolve the question set for this run.
    ///
    /// Makes a single attempt against the configured source. Any failure is
    /// logged and replaced by the built-in set, so this always yields questions.
    pub async fn resolve(&self) -> QuestionSet {
        match self.fetch().await {
            Ok(set) => {
                tracing::info!(count = set.len(), origin = %set.origin(), "questions loaded");
                set
            }
            Err(err) => {
                tracing::warn!(error = %err, "quiz loading failed, using built-in questions");
                QuestionSet::fallback(err.to_string())
            }
        }
    }

    /// Load and validate questions from the configured source without falling back.
    pub async fn fetch(&self) -> Result<QuestionSet, ResolveError> {
        let (questions, origin) = match &self.source {
            QuestionSource::Remote { endpoint } => (
                fetch_remote(endpoint, self.timeout).await?,
                Origin::Remote(endpoint.clone()),
            ),
            QuestionSource::File(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ResolveError::Read {
                        path: path.clone(),
                        source,
                    })?;
                (parse_body(&text)?, Origin::File(path.clone()))
            }
        };

        QuestionSet::new(questions, origin).ok_or(ResolveError::NoQuestions)
    }
}

async fn fetch_remote(endpoint: &str, timeout: Duration) -> Result<Vec<Question>, ResolveError> {
    let client = Client::builder().timeout(timeout).build()?;

    tracing::debug!(endpoint, timeout_ms = timeout.as_millis() as u64, "requesting questions");
    let response = client
        .get(endpoint)
        .header(ACCEPT, JSON_MIME)
        .header(CONTENT_TYPE, JSON_MIME)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ResolveError::HttpStatus(response.status()));
    }

    let body = response.text().await?;
    parse_body(&body)
}

fn parse_body(body: &str) -> Result<Vec<Question>, ResolveError> {
    if body.trim().is_empty() {
        return Err(ResolveError::EmptyPayload);
    }
    parse_questions(body)
}
