use chrono::{DateTime, Utc};
use strum::Display;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message embedded in a [`super::ChatSession`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Only ever set on assistant messages.
    pub is_crisis_detected: Option<bool>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            is_crisis_detected: None,
        }
    }

    pub fn assistant(content: impl Into<String>, is_crisis_detected: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            is_crisis_detected: Some(is_crisis_detected),
        }
    }
}
