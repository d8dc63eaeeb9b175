//! Quiz question entities

use crate::core::error::DomainError;
use serde::Serialize;

/// One labelled choice of a multiple-choice question (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub key: String,
    pub label: String,
}

impl AnswerOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A server-supplied multiple-choice question
///
/// Immutable once constructed. Options keep the order in which the
/// generation service listed them, and the correct key is guaranteed to
/// name one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    text: String,
    options: Vec<AnswerOption>,
    correct_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    difficulty: Option<u8>,
}

impl QuizQuestion {
    /// Build a validated question.
    ///
    /// Rejects blank text, an empty option list, duplicate option keys and a
    /// correct key that is not among the options.
    pub fn new(
        text: impl Into<String>,
        options: Vec<AnswerOption>,
        correct_key: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        let correct_key = correct_key.into();

        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text is empty".to_string(),
            ));
        }
        if options.is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question has no options".to_string(),
            ));
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|o| o.key == option.key) {
                return Err(DomainError::InvalidQuestion(format!(
                    "duplicate option key '{}'",
                    option.key
                )));
            }
        }
        if !options.iter().any(|o| o.key == correct_key) {
            return Err(DomainError::InvalidQuestion(format!(
                "answer '{}' is not one of the options",
                correct_key
            )));
        }

        Ok(Self {
            text,
            options,
            correct_key,
            difficulty: None,
        })
    }

    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    pub fn correct_key(&self) -> &str {
        &self.correct_key
    }

    pub fn difficulty(&self) -> Option<u8> {
        self.difficulty
    }

    /// Look up an option by key
    pub fn option(&self, key: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.key == key)
    }

    pub fn has_option(&self, key: &str) -> bool {
        self.option(key).is_some()
    }

    /// The option marked correct by the generation service
    pub fn correct_option(&self) -> &AnswerOption {
        // `new` guarantees the correct key is present
        self.option(&self.correct_key)
            .unwrap_or(&self.options[0])
    }

    pub fn is_correct(&self, key: &str) -> bool {
        self.correct_key == key
    }
}

/// An ordered set of questions produced atomically by one fetch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct QuizSet {
    questions: Vec<QuizQuestion>,
}

impl QuizSet {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuizQuestion> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuizSet {
    type Item = &'a QuizQuestion;
    type IntoIter = std::slice::Iter<'a, QuizQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
