//! Quiz generator port
//!
//! Defines the interface for reaching the remote quiz generation service.

use async_trait::async_trait;
use learnpal_domain::QuizRequest;
use thiserror::Error;

/// Transport-level errors from the generation service
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with HTTP status {0}")]
    HttpStatus(u16),

    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway to the quiz generation service
///
/// Implementations (adapters) live in the infrastructure layer. They only
/// deal with transport: the returned JSON document is validated by the
/// orchestrator.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    /// Send one generation request and return the raw response document
    async fn generate(&self, request: &QuizRequest) -> Result<serde_json::Value, GenerationError>;
}
