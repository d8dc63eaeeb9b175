//! Quiz fetch orchestrator
//!
//! Owns the [`QuizSession`] for the hosting view. Turns topic prompts into
//! installed quiz sets and forwards answering operations to the session.
//!
//! Each submission is tagged with the session generation it started; when
//! the request resolves, the result is applied only if that generation is
//! still current. Superseded requests are not aborted, their results are
//! just dropped. The orchestrator imposes no timeout of its own.

use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use crate::ports::quiz_generator::QuizGenerator;
use crate::ports::quiz_logger::{NoQuizEventLogger, QuizEvent, QuizEventLogger};
use learnpal_domain::{
    FetchFailure, FetchResolution, FetchTicket, OptionPresentation, PayloadError, QuizRequest,
    QuizResults, QuizSession, QuizSet, QuizStatus, SelectionOutcome, SessionError,
    SessionSnapshot, parse_quiz_payload, truncate,
};
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Result of [`QuizOrchestrator::submit_topic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The topic was blank; nothing happened
    Ignored,
    /// The request resolved (possibly as stale)
    Resolved(FetchResolution),
}

/// Orchestrates quiz fetching and answering for one hosting view
#[derive(Clone)]
pub struct QuizOrchestrator {
    generator: Arc<dyn QuizGenerator>,
    event_logger: Arc<dyn QuizEventLogger>,
    session: Arc<Mutex<QuizSession>>,
}

impl QuizOrchestrator {
    pub fn new(generator: Arc<dyn QuizGenerator>) -> Self {
        Self {
            generator,
            event_logger: Arc::new(NoQuizEventLogger),
            session: Arc::new(Mutex::new(QuizSession::new())),
        }
    }

    /// Create with a quiz event logger.
    pub fn with_event_logger(mut self, logger: Arc<dyn QuizEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    fn session(&self) -> MutexGuard<'_, QuizSession> {
        // Session mutations never panic midway, so a poisoned lock still holds a consistent session
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Submit a topic with default (no-op) progress
    pub async fn submit_topic(&self, topic: &str) -> SubmitOutcome {
        self.submit_topic_with_progress(topic, &NoProgress).await
    }

    /// Submit a topic and fetch its quiz, reporting progress.
    ///
    /// Blank topics are ignored. Fetch errors never escape: they move the
    /// session to [`QuizStatus::Error`].
    pub async fn submit_topic_with_progress(
        &self,
        topic: &str,
        progress: &dyn FetchProgressNotifier,
    ) -> SubmitOutcome {
        let ticket = self.session().begin_fetch(topic);
        let Some(ticket) = ticket else {
            debug!("Ignoring blank topic");
            return SubmitOutcome::Ignored;
        };

        info!(
            "Requesting quiz for '{}' (generation {})",
            truncate(ticket.topic().as_str(), 80),
            ticket.generation()
        );
        self.event_logger.log(QuizEvent::new(
            "quiz_requested",
            json!({
                "topic": ticket.topic(),
                "generation": ticket.generation(),
            }),
        ));
        progress.on_fetch_start(ticket.topic());

        let result = self.fetch(&ticket).await;
        let failure = result.as_ref().err().cloned();
        let resolution = self.session().complete_fetch(&ticket, result);

        self.record_resolution(&ticket, &resolution, failure.as_ref());
        progress.on_fetch_complete(ticket.topic(), &resolution);

        SubmitOutcome::Resolved(resolution)
    }

    async fn fetch(&self, ticket: &FetchTicket) -> Result<QuizSet, FetchFailure> {
        let request = QuizRequest::new(ticket.topic().as_str());

        let body = self
            .generator
            .generate(&request)
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        parse_quiz_payload(body).map_err(|e| match e {
            PayloadError::Rejected(status) => {
                FetchFailure::Rejected(status.unwrap_or_else(|| "<missing>".to_string()))
            }
            other => FetchFailure::Malformed(other.to_string()),
        })
    }

    fn record_resolution(
        &self,
        ticket: &FetchTicket,
        resolution: &FetchResolution,
        failure: Option<&FetchFailure>,
    ) {
        match resolution {
            FetchResolution::Installed { questions } => {
                info!(
                    "Installed {} questions for '{}'",
                    questions,
                    truncate(ticket.topic().as_str(), 80)
                );
                self.event_logger.log(QuizEvent::new(
                    "quiz_installed",
                    json!({
                        "topic": ticket.topic(),
                        "generation": ticket.generation(),
                        "questions": questions,
                    }),
                ));
            }
            FetchResolution::Failed => {
                let (kind, detail) = failure
                    .map(|f| (f.kind(), f.to_string()))
                    .unwrap_or(("unknown", String::new()));
                warn!("Quiz generation failed ({}): {}", kind, detail);
                self.event_logger.log(QuizEvent::new(
                    "quiz_failed",
                    json!({
                        "topic": ticket.topic(),
                        "generation": ticket.generation(),
                        "kind": kind,
                        "detail": detail,
                    }),
                ));
            }
            FetchResolution::Stale => {
                debug!(
                    "Discarding stale result for generation {}",
                    ticket.generation()
                );
                self.event_logger.log(QuizEvent::new(
                    "quiz_stale_discarded",
                    json!({
                        "topic": ticket.topic(),
                        "generation": ticket.generation(),
                    }),
                ));
            }
        }
    }

    /// Record an answer; the first answer for a question wins
    pub fn select_answer(
        &self,
        question_index: usize,
        option_key: &str,
    ) -> Result<SelectionOutcome, SessionError> {
        let mut session = self.session();
        let outcome = session.select_answer(question_index, option_key)?;

        match outcome {
            SelectionOutcome::Recorded { correct, completed } => {
                debug!(
                    "Answer recorded for question {}: {} ({})",
                    question_index,
                    option_key,
                    if correct { "correct" } else { "incorrect" }
                );
                self.event_logger.log(QuizEvent::new(
                    "answer_recorded",
                    json!({
                        "question": question_index,
                        "selected": option_key,
                        "correct": correct,
                    }),
                ));
                if completed {
                    let snapshot = session.snapshot();
                    info!(
                        "Quiz completed: {} of {}",
                        snapshot.score,
                        snapshot.answers.len()
                    );
                    self.event_logger.log(QuizEvent::new(
                        "quiz_completed",
                        json!({
                            "topic": snapshot.topic,
                            "score": snapshot.score,
                            "total": snapshot.answers.len(),
                        }),
                    ));
                }
            }
            SelectionOutcome::AlreadyAnswered => {
                debug!(
                    "Question {} already answered, ignoring '{}'",
                    question_index, option_key
                );
            }
        }

        Ok(outcome)
    }

    /// Show the results view once every question is answered
    pub fn submit(&self) -> Result<(), SessionError> {
        self.session().submit()
    }

    /// Re-attempt the current question set without re-fetching
    pub fn restart(&self) -> Result<(), SessionError> {
        let mut session = self.session();
        session.restart()?;
        info!("Quiz restarted");
        self.event_logger.log(QuizEvent::new(
            "quiz_restarted",
            json!({ "topic": session.topic() }),
        ));
        Ok(())
    }

    pub fn option_presentation(
        &self,
        question_index: usize,
        option_key: &str,
    ) -> Result<OptionPresentation, SessionError> {
        self.session()
            .option_presentation(question_index, option_key)
    }

    pub fn results(&self) -> Option<QuizResults> {
        self.session().results()
    }

    pub fn status(&self) -> QuizStatus {
        self.session().status()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session().snapshot()
    }
}
