//! Quiz assessment state machine
//!
//! Records one answer per question (first answer wins), keeps the score,
//! and flips into the results view once every question is answered.

use super::answer::AnswerState;
use super::question::{AnswerOption, QuizQuestion, QuizSet};
use serde::Serialize;
use thiserror::Error;

/// Contract violations on the assessment surface
///
/// These cannot come from a well-behaved host; they are reported instead of
/// corrupting state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Question index {index} is out of range (quiz has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("Option '{key}' does not exist on question {index}")]
    UnknownOption { index: usize, key: String },

    #[error("Quiz is incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
}

/// Result of a [`Assessment::select_answer`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The answer was recorded
    Recorded {
        correct: bool,
        /// This answer completed the quiz and switched on the results view
        completed: bool,
    },
    /// The question was already answered; nothing changed
    AlreadyAnswered,
}

/// How an option should be presented given the current answer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionPresentation {
    /// Question not answered yet; option can be chosen
    Neutral,
    /// The correct option of an answered question
    Correct,
    /// The wrongly chosen option of an answered question
    IncorrectSelected,
    /// Any other option of an answered question
    Dimmed,
}

impl OptionPresentation {
    pub fn as_str(&self) -> &str {
        match self {
            OptionPresentation::Neutral => "neutral",
            OptionPresentation::Correct => "correct",
            OptionPresentation::IncorrectSelected => "incorrect_selected",
            OptionPresentation::Dimmed => "dimmed",
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, OptionPresentation::Neutral)
    }

    /// Decide the presentation of `key` on `question` given its answer state
    pub fn for_option(question: &QuizQuestion, answer: &AnswerState, key: &str) -> Self {
        match answer.selected_key() {
            None => OptionPresentation::Neutral,
            Some(_) if question.is_correct(key) => OptionPresentation::Correct,
            Some(selected) if selected == key => OptionPresentation::IncorrectSelected,
            Some(_) => OptionPresentation::Dimmed,
        }
    }
}

/// One line of the results view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub index: usize,
    pub question: String,
    pub selected: AnswerOption,
    pub is_correct: bool,
    /// Present only when the chosen option was wrong
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<AnswerOption>,
}

/// Summary shown once the quiz is complete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub items: Vec<ResultItem>,
}

impl QuizResults {
    /// Items answered incorrectly
    pub fn mistakes(&self) -> impl Iterator<Item = &ResultItem> {
        self.items.iter().filter(|item| !item.is_correct)
    }
}

/// Answer tracking for one installed quiz set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    quiz_set: QuizSet,
    answers: Vec<AnswerState>,
    score: usize,
    show_results: bool,
}

impl Assessment {
    /// Start a fresh attempt with every question unanswered
    pub fn new(quiz_set: QuizSet) -> Self {
        let answers = vec![AnswerState::Unanswered; quiz_set.len()];
        Self {
            quiz_set,
            answers,
            score: 0,
            show_results: false,
        }
    }

    pub fn quiz_set(&self) -> &QuizSet {
        &self.quiz_set
    }

    pub fn answers(&self) -> &[AnswerState] {
        &self.answers
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.quiz_set.len()
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(AnswerState::is_answered)
    }

    /// Record the answer for a question.
    ///
    /// The first recorded answer for a question is final; later calls for
    /// the same question return [`SelectionOutcome::AlreadyAnswered`].
    pub fn select_answer(
        &mut self,
        index: usize,
        key: &str,
    ) -> Result<SelectionOutcome, AssessmentError> {
        let correct = self.checked_question(index, key)?.is_correct(key);
        if self.answers[index].is_answered() {
            return Ok(SelectionOutcome::AlreadyAnswered);
        }

        self.answers[index] = AnswerState::Answered {
            selected_key: key.to_string(),
        };
        if correct {
            self.score += 1;
        }

        let completed = !self.show_results && self.is_complete();
        if completed {
            self.show_results = true;
        }

        Ok(SelectionOutcome::Recorded { correct, completed })
    }

    /// Decide how an option is presented
    pub fn option_presentation(
        &self,
        index: usize,
        key: &str,
    ) -> Result<OptionPresentation, AssessmentError> {
        let question = self.checked_question(index, key)?;
        Ok(OptionPresentation::for_option(
            question,
            &self.answers[index],
            key,
        ))
    }

    fn checked_question(&self, index: usize, key: &str) -> Result<&QuizQuestion, AssessmentError> {
        let question = self
            .quiz_set
            .get(index)
            .ok_or(AssessmentError::QuestionOutOfRange {
                index,
                len: self.quiz_set.len(),
            })?;
        if !question.has_option(key) {
            return Err(AssessmentError::UnknownOption {
                index,
                key: key.to_string(),
            });
        }
        Ok(question)
    }

    /// Explicitly ask for the results view.
    ///
    /// Only succeeds once every question has been answered. Answering the
    /// last question already does this, so for non-empty quizzes this is
    /// mostly a confirmation.
    pub fn submit(&mut self) -> Result<(), AssessmentError> {
        if !self.is_complete() {
            return Err(AssessmentError::Incomplete {
                answered: self.answered_count(),
                total: self.total(),
            });
        }
        self.show_results = true;
        Ok(())
    }

    /// Re-attempt the same question set from scratch
    pub fn restart(&mut self) {
        self.answers.fill(AnswerState::Unanswered);
        self.score = 0;
        self.show_results = false;
    }

    /// The results view, available only once results are shown
    pub fn results(&self) -> Option<QuizResults> {
        if !self.show_results {
            return None;
        }

        let items = self
            .quiz_set
            .iter()
            .zip(&self.answers)
            .enumerate()
            .filter_map(|(index, (question, answer))| {
                let selected = question.option(answer.selected_key()?)?.clone();
                let is_correct = question.is_correct(&selected.key);
                Some(ResultItem {
                    index,
                    question: question.text().to_string(),
                    correct_answer: (!is_correct).then(|| question.correct_option().clone()),
                    selected,
                    is_correct,
                })
            })
            .collect();

        Some(QuizResults {
            score: self.score,
            total: self.total(),
            items,
        })
    }
}
