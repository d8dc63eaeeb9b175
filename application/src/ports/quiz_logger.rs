//! Port for structured quiz session logging.
//!
//! Defines the [`QuizEventLogger`] trait for recording session events
//! (requests, installed quizzes, failures, answers) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the session
//! history in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured quiz session event.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The timestamp is added by the writer.
pub struct QuizEvent {
    /// Event type identifier (e.g., "quiz_requested", "answer_recorded").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl QuizEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging quiz session events.
///
/// `log` is synchronous and infallible; writers drop records they cannot
/// persist.
pub trait QuizEventLogger: Send + Sync {
    fn log(&self, event: QuizEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoQuizEventLogger;

impl QuizEventLogger for NoQuizEventLogger {
    fn log(&self, _event: QuizEvent) {}
}
