use std::fmt;
use std::ops::Deref;
use std::path::PathBuf;

use super::fallback::fallback_questions;
use crate::models::Question;

/// Where a resolved question set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Remote(String),
    File(PathBuf),
    /// The built-in set, with the reason the configured source was not used.
    Fallback(String),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Remote(url) => write!(f, "remote ({})", url),
            Origin::File(path) => write!(f, "file ({})", path.display()),
            Origin::Fallback(_) => f.write_str("built-in set"),
        }
    }
}

/// An ordered, non-empty, immutable list of questions for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
    origin: Origin,
}

impl QuestionSet {
    /// Wrap resolved questions. Returns `None` for an empty list.
    pub fn new(questions: Vec<Question>, origin: Origin) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self { questions, origin })
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            questions: fallback_questions(),
            origin: Origin::Fallback(reason.into()),
        }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Fallback(_))
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

impl Deref for QuestionSet {
    type Target = [Question];

    fn deref(&self) -> &[Question] {
        &self.questions
    }
}
