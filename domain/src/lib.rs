//! Domain layer for learnpal
//!
//! This crate contains the core quiz logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz Session
//!
//! A [`QuizSession`] owns one attempt at a generated quiz for one topic:
//!
//! - **Fetch lifecycle**: `Idle → Loading → Ready | Error`, guarded by a
//!   generation counter so superseded fetch results are discarded
//! - **Assessment**: first answer wins per question, the score only grows,
//!   and the results view opens once every question is answered

pub mod config;
pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, string::truncate, topic::Topic};
pub use quiz::{
    answer::AnswerState,
    assessment::{
        Assessment, AssessmentError, OptionPresentation, QuizResults, ResultItem,
        SelectionOutcome,
    },
    payload::{PayloadError, QuizRequest, SUCCESS_STATUS, parse_quiz_payload},
    question::{AnswerOption, QuizQuestion, QuizSet},
    session::{
        FETCH_FAILED_MESSAGE, FetchFailure, FetchResolution, FetchTicket, QuizSession,
        QuizStatus, SessionError, SessionSnapshot,
    },
};
