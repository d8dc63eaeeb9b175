//! Output format value object

use serde::{Deserialize, Serialize};

/// How quizzes and results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Questions with options, highlighting and difficulty (default)
    Full,
    /// Only the score line and the mistakes
    Summary,
    /// Session snapshot as JSON
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Full
    }
}
