//! Topic value object

use serde::{Deserialize, Serialize};

/// A topic prompt submitted for quiz generation (Value Object)
///
/// Always stored trimmed; a topic is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a new topic
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        Self::try_new(content).expect("Topic cannot be empty")
    }

    /// Try to create a new topic, returning None if blank after trimming
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the topic text
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_is_trimmed() {
        let topic = Topic::new("  osmosis \n");
        assert_eq!(topic.as_str(), "osmosis");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(Topic::try_new("").is_none());
        assert!(Topic::try_new("   \t ").is_none());
    }

    #[test]
    #[should_panic]
    fn test_blank_topic_panics() {
        Topic::new(" ");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Topic::new("cell biology")).unwrap();
        assert_eq!(json, "\"cell biology\"");
    }
}
