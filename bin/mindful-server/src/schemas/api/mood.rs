//! Request / response types for the mood API (`/api/mood/...`).

use crate::entities::{MoodEntry, NewMoodEntry};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for `POST /api/mood`. Any `userId` sent by the client is
/// ignored; entries always belong to the demo user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMoodRequest {
    /// Mood label, e.g. `"happy"` or `"anxious"`.
    #[serde(default)]
    #[validate(
        required(message = "mood is required"),
        length(min = 1, max = 64, message = "mood must be 1-64 characters")
    )]
    pub mood: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

impl CreateMoodRequest {
    /// Convert a validated request into store input owned by `user_id`.
    /// Returns `None` only if `mood` is absent.
    pub fn into_new_entry(self, user_id: &str) -> Option<NewMoodEntry> {
        Some(NewMoodEntry {
            user_id: Some(user_id.to_owned()),
            mood: self.mood?,
            notes: self.notes,
        })
    }
}

/// A stored mood entry as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntryResponse {
    pub id: String,
    pub user_id: String,
    pub mood: String,
    /// Always present; `null` when no notes were given.
    pub notes: Option<String>,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

/// Query parameters for `GET /api/mood/recent`.
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RecentMoodQuery {
    /// Look-back window in whole days (default `7`).
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    7
}

impl MoodEntry {
    pub fn to_response(&self) -> MoodEntryResponse {
        MoodEntryResponse {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            mood: self.mood.clone(),
            notes: self.notes.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}
