//! Quiz session aggregate
//!
//! A session tracks one quiz attempt for the current topic. Each topic
//! submission bumps a generation counter and hands out a [`FetchTicket`];
//! a fetch result is only applied when its ticket still matches the current
//! generation, so a late answer for a superseded topic can never land in the
//! newer session.

use super::answer::AnswerState;
use super::assessment::{
    Assessment, AssessmentError, OptionPresentation, QuizResults, SelectionOutcome,
};
use super::question::QuizSet;
use crate::core::topic::Topic;
use serde::Serialize;
use thiserror::Error;

/// User-facing message for every failed fetch
pub const FETCH_FAILED_MESSAGE: &str = "Failed to generate quiz, try again";

/// Lifecycle status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

impl QuizStatus {
    pub fn as_str(&self) -> &str {
        match self {
            QuizStatus::Idle => "idle",
            QuizStatus::Loading => "loading",
            QuizStatus::Ready => "ready",
            QuizStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic classification of a failed fetch
///
/// All variants look the same to the user ([`FETCH_FAILED_MESSAGE`]); the
/// detail is kept for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("service rejected the request: {0}")]
    Rejected(String),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl FetchFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchFailure::Transport(_) => "transport",
            FetchFailure::Rejected(_) => "rejected",
            FetchFailure::Malformed(_) => "malformed",
        }
    }

    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Tag identifying the fetch a result belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    topic: Topic,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }
}

/// What happened to a fetch result handed to [`QuizSession::complete_fetch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResolution {
    /// A new quiz set was installed
    Installed { questions: usize },
    /// The session moved to the error state
    Failed,
    /// The ticket was superseded; the result was discarded
    Stale,
}

/// Errors from answering operations on a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No quiz is ready (session is {0})")]
    NotReady(QuizStatus),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Idle,
    Loading,
    Ready(Assessment),
    Failed(FetchFailure),
}

/// Read-only view of a session for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub topic: Option<Topic>,
    pub status: QuizStatus,
    pub quiz_set: Option<QuizSet>,
    pub answers: Vec<AnswerState>,
    pub score: usize,
    pub show_results: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionSnapshot {
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }
}

/// One quiz attempt for the current topic (Aggregate Root)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    topic: Option<Topic>,
    generation: u64,
    state: SessionState,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            topic: None,
            generation: 0,
            state: SessionState::Idle,
        }
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> QuizStatus {
        match self.state {
            SessionState::Idle => QuizStatus::Idle,
            SessionState::Loading => QuizStatus::Loading,
            SessionState::Ready(_) => QuizStatus::Ready,
            SessionState::Failed(_) => QuizStatus::Error,
        }
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        match &self.state {
            SessionState::Ready(assessment) => Some(assessment),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match &self.state {
            SessionState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Start loading a quiz for a new topic.
    ///
    /// Returns `None` (and changes nothing) for a blank topic. Otherwise the
    /// previous quiz, answers and score are dropped and a ticket for the new
    /// generation is returned.
    pub fn begin_fetch(&mut self, topic: &str) -> Option<FetchTicket> {
        let topic = Topic::try_new(topic)?;
        self.generation += 1;
        self.topic = Some(topic.clone());
        self.state = SessionState::Loading;
        Some(FetchTicket {
            generation: self.generation,
            topic,
        })
    }

    /// Whether a ticket still belongs to the current fetch
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && matches!(self.state, SessionState::Loading)
    }

    /// Apply the result of the fetch identified by `ticket`.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<QuizSet, FetchFailure>,
    ) -> FetchResolution {
        if !self.is_current(ticket) {
            return FetchResolution::Stale;
        }

        match result {
            Ok(quiz_set) => {
                let questions = quiz_set.len();
                self.state = SessionState::Ready(Assessment::new(quiz_set));
                FetchResolution::Installed { questions }
            }
            Err(failure) => {
                self.state = SessionState::Failed(failure);
                FetchResolution::Failed
            }
        }
    }

    fn ready_mut(&mut self) -> Result<&mut Assessment, SessionError> {
        let status = self.status();
        match &mut self.state {
            SessionState::Ready(assessment) => Ok(assessment),
            _ => Err(SessionError::NotReady(status)),
        }
    }

    fn ready(&self) -> Result<&Assessment, SessionError> {
        self.assessment()
            .ok_or_else(|| SessionError::NotReady(self.status()))
    }

    pub fn select_answer(
        &mut self,
        index: usize,
        key: &str,
    ) -> Result<SelectionOutcome, SessionError> {
        Ok(self.ready_mut()?.select_answer(index, key)?)
    }

    pub fn option_presentation(
        &self,
        index: usize,
        key: &str,
    ) -> Result<OptionPresentation, SessionError> {
        Ok(self.ready()?.option_presentation(index, key)?)
    }

    pub fn submit(&mut self) -> Result<(), SessionError> {
        Ok(self.ready_mut()?.submit()?)
    }

    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.ready_mut()?.restart();
        Ok(())
    }

    pub fn results(&self) -> Option<QuizResults> {
        self.assessment().and_then(Assessment::results)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let assessment = self.assessment();
        SessionSnapshot {
            topic: self.topic.clone(),
            status: self.status(),
            quiz_set: assessment.map(|a| a.quiz_set().clone()),
            answers: assessment.map(|a| a.answers().to_vec()).unwrap_or_default(),
            score: assessment.map_or(0, Assessment::score),
            show_results: assessment.is_some_and(Assessment::show_results),
            error: self.failure().map(|f| f.user_message().to_string()),
        }
    }
}
