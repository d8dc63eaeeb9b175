//! Presentation layer for learnpal
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::QuizRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::QuizFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
