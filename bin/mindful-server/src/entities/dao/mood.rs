use chrono::{DateTime, Utc};

/// A single mood submission. Immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub id: String,
    pub user_id: String,
    pub mood: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for [`crate::entities::MoodStore::create_mood_entry`].
#[derive(Debug, Clone)]
pub struct NewMoodEntry {
    pub user_id: Option<String>,
    pub mood: String,
    pub notes: Option<String>,
}
