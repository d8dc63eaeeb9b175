//! Generation service configuration from TOML (`[service]` section)

use serde::{Deserialize, Serialize};

/// Default endpoint of the quiz generation service
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/quiz";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Raw service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// URL the `{ "prompt": ... }` request is POSTed to
    pub endpoint: String,
    /// Request timeout applied by the HTTP client
    pub timeout_secs: u64,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
