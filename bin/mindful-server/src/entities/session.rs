use crate::entities::{ChatMessage, ChatSession, MemoryStore, NewChatSession};
use chrono::Utc;
use std::future::Future;
use uuid::Uuid;

pub trait SessionStore: Send + Sync + 'static {
    /// First session owned by `user_id`. One session per user is assumed,
    /// not enforced; with duplicates the match is unspecified.
    fn get_chat_session(&self, user_id: &str) -> impl Future<Output = Option<ChatSession>> + Send;
    fn create_chat_session(
        &self,
        input: NewChatSession,
    ) -> impl Future<Output = ChatSession> + Send;
    /// Replace the messages of `user_id`'s session, creating it if absent.
    fn update_chat_session(
        &self,
        user_id: &str,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = ChatSession> + Send;
}

impl SessionStore for MemoryStore {
    async fn get_chat_session(&self, user_id: &str) -> Option<ChatSession> {
        self.sessions
            .read()
            .await
            .values()
            .find(|s| s.user_id == user_id)
            .cloned()
    }

    async fn create_chat_session(&self, input: NewChatSession) -> ChatSession {
        let session = ChatSession {
            id: Uuid::new_v4().to_string(),
            user_id: input
                .user_id
                .unwrap_or_else(|| self.demo_user_id().to_owned()),
            messages: input.messages.unwrap_or_default(),
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        session
    }

    async fn update_chat_session(&self, user_id: &str, messages: Vec<ChatMessage>) -> ChatSession {
        // Read and write are separate lock acquisitions; two concurrent
        // upserts for a new user may both create a session.
        let existing = self.get_chat_session(user_id).await;
        match existing {
            Some(session) => {
                let mut sessions = self.sessions.write().await;
                match sessions.get_mut(&session.id) {
                    Some(stored) => {
                        stored.messages = messages;
                        stored.clone()
                    }
                    None => {
                        let updated = ChatSession { messages, ..session };
                        sessions.insert(updated.id.clone(), updated.clone());
                        updated
                    }
                }
            }
            None => {
                self.create_chat_session(NewChatSession {
                    user_id: Some(user_id.to_owned()),
                    messages: Some(messages),
                })
                .await
            }
        }
    }
}
