//! Infrastructure layer for learnpal
//!
//! Adapters for the ports defined in the application layer: the HTTP
//! quiz generator, the JSONL event log, and configuration file loading.

pub mod config;
pub mod generation;
pub mod logging;

pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig, FileServiceConfig,
};
pub use generation::HttpQuizGenerator;
pub use logging::JsonlQuizLogger;
