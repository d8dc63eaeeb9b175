//! Structured session logging.
//!
//! [`JsonlQuizLogger`] implements the
//! [`QuizEventLogger`](learnpal_application::QuizEventLogger) port by
//! appending JSON lines to a file.

mod jsonl_logger;

pub use jsonl_logger::JsonlQuizLogger;
