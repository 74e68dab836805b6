//! Data-access layer.
//!
//! [`SessionStore`] and [`MoodStore`] define the create/read/update contract
//! the route layer relies on. The only implementation is [`MemoryStore`],
//! a process-local map; a durable backend can implement the same traits and
//! be swapped in through [`crate::state::AppState`] without touching handlers.
//!
//! Trait methods use `impl Future` in their signatures so no extra
//! `async-trait` boxing is required.
//!
//! Lookups never fail: absence is `None` or an empty `Vec`.

pub mod dao;
pub mod mood;
pub mod session;

pub use dao::{ChatMessage, ChatSession, MoodEntry, NewChatSession, NewMoodEntry, Role};

pub use mood::MoodStore;
pub use session::SessionStore;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// In-memory store for chat sessions and mood entries, keyed by record id.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    demo_user_id: Arc<str>,
    sessions: Arc<RwLock<HashMap<String, ChatSession>>>,
    mood_entries: Arc<RwLock<HashMap<String, MoodEntry>>>,
}

impl MemoryStore {
    /// Create an empty store. `demo_user_id` fills in records created
    /// without an explicit owner.
    pub fn new(demo_user_id: impl Into<Arc<str>>) -> Self {
        Self {
            demo_user_id: demo_user_id.into(),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            mood_entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn demo_user_id(&self) -> &str {
        &self.demo_user_id
    }
}
