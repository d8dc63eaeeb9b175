//! Per-question answer state

use serde::Serialize;

/// Answer state for a single question
///
/// A selected key exists exactly when the question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnswerState {
    #[default]
    Unanswered,
    Answered {
        selected_key: String,
    },
}

impl AnswerState {
    pub fn is_answered(&self) -> bool {
        matches!(self, AnswerState::Answered { .. })
    }

    pub fn selected_key(&self) -> Option<&str> {
        match self {
            AnswerState::Answered { selected_key } => Some(selected_key),
            AnswerState::Unanswered => None,
        }
    }
}
