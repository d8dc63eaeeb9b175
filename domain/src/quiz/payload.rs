//! Wire contract of the quiz generation service
//!
//! The service answers a `{ "prompt": ... }` request with
//!
//! ```json
//! { "status": "success",
//!   "mcqs": [ { "question": "...", "options": { "A": "...", "B": "..." },
//!               "answer": "A", "difficulty": 4 } ] }
//! ```
//!
//! [`parse_quiz_payload`] turns such a document into a validated
//! [`QuizSet`], or explains why it could not.

use super::question::{AnswerOption, QuizQuestion, QuizSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Status marker of a successful generation
pub const SUCCESS_STATUS: &str = "success";

/// Request body sent to the generation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRequest {
    pub prompt: String,
}

impl QuizRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Why a response body could not be turned into a quiz set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Response is not a JSON object")]
    NotAnObject,

    #[error("Generation status was {0:?}, expected \"success\"")]
    Rejected(Option<String>),

    #[error("Response has no 'mcqs' list")]
    MissingQuestions,

    #[error("Question {index} is malformed: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// One raw entry of the `mcqs` list
#[derive(Debug, Deserialize)]
struct McqPayload {
    question: String,
    options: serde_json::Map<String, Value>,
    answer: String,
    #[serde(default)]
    difficulty: Option<Value>,
}

impl McqPayload {
    fn into_question(self) -> Result<QuizQuestion, String> {
        let mut options = Vec::with_capacity(self.options.len());
        for (key, label) in self.options {
            match label {
                Value::String(label) => options.push(AnswerOption::new(key, label)),
                other => return Err(format!("option '{}' has non-text label {}", key, other)),
            }
        }

        let question =
            QuizQuestion::new(self.question, options, self.answer).map_err(|e| e.to_string())?;

        // Difficulty is informational; out-of-range or non-numeric values are dropped
        let difficulty = self
            .difficulty
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|d| u8::try_from(d).ok());

        Ok(match difficulty {
            Some(d) => question.with_difficulty(d),
            None => question,
        })
    }
}

/// Validate a generation response and build the quiz set it describes.
///
/// Requires a `"success"` status marker and an `mcqs` array whose every
/// entry is a well-formed question. Any defect rejects the whole payload;
/// a quiz set is never partially installed.
pub fn parse_quiz_payload(body: Value) -> Result<QuizSet, PayloadError> {
    let Value::Object(mut root) = body else {
        return Err(PayloadError::NotAnObject);
    };

    match root.get("status") {
        Some(Value::String(status)) if status == SUCCESS_STATUS => {}
        Some(Value::String(status)) => return Err(PayloadError::Rejected(Some(status.clone()))),
        _ => return Err(PayloadError::Rejected(None)),
    }

    let Some(Value::Array(mcqs)) = root.remove("mcqs") else {
        return Err(PayloadError::MissingQuestions);
    };

    let questions = mcqs
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            serde_json::from_value::<McqPayload>(raw)
                .map_err(|e| e.to_string())
                .and_then(McqPayload::into_question)
                .map_err(|reason| PayloadError::InvalidQuestion { index, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuizSet::new(questions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "status": "success",
            "mcqs": [
                {
                    "question": "What drives osmosis?",
                    "options": { "A": "Heat", "B": "Water potential", "C": "Light", "D": "ATP" },
                    "answer": "B",
                    "difficulty": 4
                },
                {
                    "question": "Which membrane is semi-permeable?",
                    "options": { "D": "Glass", "C": "Cell membrane" },
                    "answer": "C"
                }
            ]
        })
    }

    #[test]
    fn test_parse_valid_payload() {
        let quiz = parse_quiz_payload(sample()).unwrap();
        assert_eq!(quiz.len(), 2);

        let first = quiz.get(0).unwrap();
        assert_eq!(first.text(), "What drives osmosis?");
        assert_eq!(first.correct_option().label, "Water potential");
        assert_eq!(first.difficulty(), Some(4));

        // Document order of options is kept
        let keys: Vec<_> = quiz.get(1).unwrap().options().iter().map(|o| o.key.clone()).collect();
        assert_eq!(keys, vec!["D", "C"]);
    }

    #[test]
    fn test_error_status_is_rejected() {
        let err = parse_quiz_payload(json!({ "status": "error", "message": "quota" })).unwrap_err();
        assert_eq!(err, PayloadError::Rejected(Some("error".to_string())));
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let err = parse_quiz_payload(json!({ "mcqs": [] })).unwrap_err();
        assert_eq!(err, PayloadError::Rejected(None));
    }

    #[test]
    fn test_non_object_body() {
        assert_eq!(
            parse_quiz_payload(json!(["status", "success"])).unwrap_err(),
            PayloadError::NotAnObject
        );
    }

    #[test]
    fn test_missing_or_non_list_mcqs() {
        assert_eq!(
            parse_quiz_payload(json!({ "status": "success" })).unwrap_err(),
            PayloadError::MissingQuestions
        );
        assert_eq!(
            parse_quiz_payload(json!({ "status": "success", "mcqs": "none" })).unwrap_err(),
            PayloadError::MissingQuestions
        );
    }

    #[test]
    fn test_answer_not_in_options() {
        let body = json!({
            "status": "success",
            "mcqs": [
                { "question": "ok", "options": { "A": "a" }, "answer": "A" },
                { "question": "bad", "options": { "A": "a", "B": "b" }, "answer": "E" }
            ]
        });
        match parse_quiz_payload(body).unwrap_err() {
            PayloadError::InvalidQuestion { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_and_bad_labels() {
        let missing_answer = json!({
            "status": "success",
            "mcqs": [ { "question": "q", "options": { "A": "a" } } ]
        });
        assert!(matches!(
            parse_quiz_payload(missing_answer),
            Err(PayloadError::InvalidQuestion { index: 0, .. })
        ));

        let numeric_label = json!({
            "status": "success",
            "mcqs": [ { "question": "q", "options": { "A": 1 }, "answer": "A" } ]
        });
        assert!(matches!(
            parse_quiz_payload(numeric_label),
            Err(PayloadError::InvalidQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_odd_difficulty_is_ignored() {
        let body = json!({
            "status": "success",
            "mcqs": [ { "question": "q", "options": { "A": "a" }, "answer": "A", "difficulty": "hard" } ]
        });
        let quiz = parse_quiz_payload(body).unwrap();
        assert_eq!(quiz.get(0).unwrap().difficulty(), None);
    }

    #[test]
    fn test_empty_list_is_a_valid_quiz() {
        let quiz = parse_quiz_payload(json!({ "status": "success", "mcqs": [] })).unwrap();
        assert!(quiz.is_empty());
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(QuizRequest::new("osmosis")).unwrap();
        assert_eq!(body, json!({ "prompt": "osmosis" }));
    }
}
