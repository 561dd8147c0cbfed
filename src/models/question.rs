use std::fmt;

use serde_json::Value;

/// Identifier of a question within a set.
///
/// Sources use numbers or strings. Any other JSON shape is kept as-is, since
/// the id is informational and never affects scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl QuestionId {
    /// Convert a decoded `id` field. `null` means no id.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(Self::Text(text)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(n) => Self::Number(n),
                None => Self::Other(Value::Number(n)),
            }),
            other => Some(Self::Other(other)),
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => f.write_str(s),
            QuestionId::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: Option<QuestionId>,
    pub question: String,
    pub options: Vec<String>,
    /// Expected to be one of `options`. A value outside the list is accepted and
    /// simply never scores.
    pub correct_answer: String,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}
