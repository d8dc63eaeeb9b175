//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod repl;
mod service;

pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use service::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, FileServiceConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("service.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("service.endpoint must be an http(s) URL, got '{0}'")]
    UnsupportedEndpoint(String),

    #[error("service.timeout_secs cannot be 0")]
    InvalidTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz generation service settings
    pub service: FileServiceConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Structured event log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let endpoint = self.service.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigValidationError::UnsupportedEndpoint(
                endpoint.to_string(),
            ));
        }

        if self.service.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        Ok(())
    }
}
