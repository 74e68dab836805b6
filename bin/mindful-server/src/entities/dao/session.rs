use chrono::{DateTime, Utc};

use super::ChatMessage;

/// A stored chat session. Messages are replaced wholesale on update.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: String,
    pub user_id: String,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

/// Input for [`crate::entities::SessionStore::create_chat_session`].
#[derive(Debug, Clone, Default)]
pub struct NewChatSession {
    /// Falls back to the store's demo user id.
    pub user_id: Option<String>,
    /// Falls back to an empty sequence.
    pub messages: Option<Vec<ChatMessage>>,
}
