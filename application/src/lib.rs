//! Application layer for learnpal
//!
//! This crate contains the quiz fetch orchestrator and the port definitions
//! it depends on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{FetchProgressNotifier, NoProgress},
    quiz_generator::{GenerationError, QuizGenerator},
    quiz_logger::{NoQuizEventLogger, QuizEvent, QuizEventLogger},
};
pub use use_cases::quiz_orchestrator::{QuizOrchestrator, SubmitOutcome};
