//! Interactive quiz session
//!
//! Provides a line-editor based REPL for requesting and taking quizzes.

mod repl;

pub use repl::{QuizRepl, ReplCommand, ReplInput, parse_input};
