//! Conversion of a raw JSON payload into validated questions.

use serde::Deserialize;
use serde_json::Value;

use super::error::ResolveError;
use crate::models::{Question, QuestionId};

/// Shape of a question as it arrives on the wire, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    correct_answer: Option<String>,
}

impl RawQuestion {
    fn validate(self) -> Result<Question, &'static str> {
        let question = self
            .question
            .filter(|text| !text.is_empty())
            .ok_or("missing question text")?;
        let options = self
            .options
            .filter(|options| !options.is_empty())
            .ok_or("options must be a non-empty list")?;
        let correct_answer = self
            .correct_answer
            .filter(|answer| !answer.is_empty())
            .ok_or("missing correct answer")?;

        Ok(Question {
            id: self.id.and_then(QuestionId::from_value),
            question,
            options,
            correct_answer,
        })
    }
}

/// Parse a JSON document into questions.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, ResolveError> {
    let value: Value = serde_json::from_str(text)?;
    questions_from_value(value)
}

/// Turn a decoded payload into an ordered list of questions.
///
/// An object is accepted in place of a list and contributes its values in
/// document order. A single bad element rejects the whole payload.
pub fn questions_from_value(value: Value) -> Result<Vec<Question>, ResolveError> {
    let items = match value {
        Value::Null => return Err(ResolveError::EmptyPayload),
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, item)| item).collect(),
        _ => return Err(ResolveError::NotACollection),
    };

    if items.is_empty() {
        return Err(ResolveError::NoQuestions);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let raw: RawQuestion =
                serde_json::from_value(item).map_err(|err| ResolveError::InvalidQuestion {
                    index,
                    reason: err.to_string(),
                })?;
            raw.validate()
                .map_err(|reason| ResolveError::InvalidQuestion {
                    index,
                    reason: reason.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn question(text: &str, answer: &str) -> Value {
        json!({
            "question": text,
            "options": ["A", "B", "C"],
            "correctAnswer": answer,
        })
    }

    #[test]
    fn test_array_payload() {
        let questions =
            questions_from_value(json!([question("first", "A"), question("second", "B")])).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "first");
        assert_eq!(questions[1].correct_answer, "B");
        assert_eq!(questions[0].id, None);
    }

    #[test]
    fn test_object_payload_keeps_document_order() {
        let payload = parse_questions(
            r#"{
                "b": {"id": 7, "question": "second key first", "options": ["x"], "correctAnswer": "x"},
                "a": {"id": "q-a", "question": "first key second", "options": ["y"], "correctAnswer": "y"}
            }"#,
        )
        .unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].question, "second key first");
        assert_eq!(payload[0].id, Some(QuestionId::Number(7)));
        assert_eq!(payload[1].id, Some(QuestionId::Text("q-a".to_string())));
    }

    #[test]
    fn test_missing_correct_answer_rejects_everything() {
        let err = questions_from_value(json!([
            question("ok", "A"),
            {"question": "broken", "options": ["A"]},
        ]))
        .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidQuestion { index: 1, .. }));
    }

    #[test]
    fn test_rejects_empty_fields() {
        let empty_text = json!([{"question": "", "options": ["A"], "correctAnswer": "A"}]);
        let no_options = json!([{"question": "q", "options": [], "correctAnswer": "A"}]);
        let empty_answer = json!([{"question": "q", "options": ["A"], "correctAnswer": ""}]);
        let options_not_list = json!([{"question": "q", "options": "A", "correctAnswer": "A"}]);

        for payload in [empty_text, no_options, empty_answer, options_not_list] {
            assert!(matches!(
                questions_from_value(payload),
                Err(ResolveError::InvalidQuestion { index: 0, .. })
            ));
        }
    }

    #[test]
    fn test_rejects_non_collections() {
        assert!(matches!(questions_from_value(Value::Null), Err(ResolveError::EmptyPayload)));
        assert!(matches!(questions_from_value(json!("text")), Err(ResolveError::NotACollection)));
        assert!(matches!(questions_from_value(json!(42)), Err(ResolveError::NotACollection)));
        assert!(matches!(questions_from_value(json!([])), Err(ResolveError::NoQuestions)));
        assert!(matches!(questions_from_value(json!({})), Err(ResolveError::NoQuestions)));
    }

    #[test]
    fn test_unusual_ids_do_not_reject_the_payload() {
        for id in [json!(1.0), json!(2.5), json!(true), json!(u64::MAX), json!({"k": 1}), json!(null)] {
            let questions = questions_from_value(json!([
                {"id": id.clone(), "question": "q", "options": ["A"], "correctAnswer": "A"}
            ]))
            .unwrap();
            assert_eq!(questions.len(), 1, "id {} should be accepted", id);
            assert_eq!(questions[0].correct_answer, "A");
        }
    }

    #[test]
    fn test_answer_outside_options_is_accepted() {
        let questions = questions_from_value(json!([question("odd", "Z")])).unwrap();
        assert_eq!(questions[0].correct_answer, "Z");
    }

    #[test]
    fn test_invalid_json_text() {
        assert!(matches!(parse_questions("{not json"), Err(ResolveError::Json(_))));
    }
}
