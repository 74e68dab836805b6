use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::entities::{MoodEntry, MoodStore};
use crate::error::{ServerError, tagged};
use crate::extract::ValidatedJson;
use crate::schemas::api::mood::{CreateMoodRequest, MoodEntryResponse, RecentMoodQuery};
use crate::state::AppState;

const MOOD_TAG: &str = "mood";

#[derive(OpenApi)]
#[openapi(
    paths(create_mood_entry, list_mood_entries, recent_mood_entries),
    components(schemas(CreateMoodRequest, MoodEntryResponse))
)]
pub struct MoodApi;

/// Register mood routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mood", get(list_mood_entries).post(create_mood_entry))
        .route("/mood/recent", get(recent_mood_entries))
}

#[utoipa::path(
    post,
    path = "/api/mood",
    tag = "mood",
    request_body = CreateMoodRequest,
    responses(
        (status = 200, description = "Mood entry created", body = MoodEntryResponse),
        (status = 400, description = "Invalid mood entry"),
    )
)]
pub async fn create_mood_entry(
    State(state): State<Arc<AppState>>,
    body: Result<ValidatedJson<CreateMoodRequest>, ServerError>,
) -> Result<Json<MoodEntryResponse>, ServerError> {
    let ValidatedJson(req) = body.map_err(tagged(MOOD_TAG))?;
    let input = req
        .into_new_entry(state.demo_user_id())
        .ok_or_else(|| tagged(MOOD_TAG)(ServerError::BadRequest("mood is required".into())))?;

    let entry = state.store.create_mood_entry(input).await;
    info!(entry_id = %entry.id, "mood entry created");
    Ok(Json(entry.to_response()))
}

#[utoipa::path(
    get,
    path = "/api/mood",
    tag = "mood",
    responses(
        (status = 200, description = "Demo user's entries, newest first", body = Vec<MoodEntryResponse>),
    )
)]
pub async fn list_mood_entries(State(state): State<Arc<AppState>>) -> Json<Vec<MoodEntryResponse>> {
    let entries = state.store.get_mood_entries(state.demo_user_id()).await;
    Json(entries.iter().map(MoodEntry::to_response).collect())
}

/// Entries from the last `days` days across every user.
#[utoipa::path(
    get,
    path = "/api/mood/recent",
    tag = "mood",
    params(RecentMoodQuery),
    responses(
        (status = 200, description = "Recent entries", body = Vec<MoodEntryResponse>),
        (status = 400, description = "Invalid query"),
    )
)]
pub async fn recent_mood_entries(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RecentMoodQuery>, QueryRejection>,
) -> Result<Json<Vec<MoodEntryResponse>>, ServerError> {
    let Query(query) = query
        .map_err(|e| ServerError::BadRequest(e.body_text()))
        .map_err(tagged(MOOD_TAG))?;
    let entries = state.store.get_recent_mood_entries(query.days).await;
    Ok(Json(entries.iter().map(MoodEntry::to_response).collect()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::NewMoodEntry;
    use crate::routes::testing::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn create_then_list() {
        let state = state_with(Arc::new(StubGenerator::default()));

        let (status, created) = send(
            app(&state),
            post_json("/api/mood", r#"{"mood":"happy","notes":"sunny day","userId":"intruder"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["mood"], "happy");
        assert_eq!(created["notes"], "sunny day");
        assert_eq!(created["userId"], state.demo_user_id());
        assert!(created["createdAt"].is_string());

        let (status, listed) = send(app(&state), get_request("/api/mood")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
        assert_eq!(listed[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn notes_default_to_null() {
        let state = state_with(Arc::new(StubGenerator::default()));
        let (status, created) =
            send(app(&state), post_json("/api/mood", r#"{"mood":"calm"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(created.get("notes").is_some_and(serde_json::Value::is_null));
    }

    #[tokio::test]
    async fn invalid_mood_is_rejected_without_side_effects() {
        let state = state_with(Arc::new(StubGenerator::default()));

        for body in [
            r#"{"notes":"no mood"}"#,
            r#"{"mood":""}"#,
            r#"{"mood":42}"#,
            "[]",
        ] {
            let (status, json) = send(app(&state), post_json("/api/mood", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
            assert!(json["error"].is_string());
        }

        assert!(state.store.get_mood_entries(state.demo_user_id()).await.is_empty());
    }

    #[tokio::test]
    async fn list_excludes_other_users() {
        let state = state_with(Arc::new(StubGenerator::default()));
        state
            .store
            .create_mood_entry(NewMoodEntry {
                user_id: Some("someone-else".into()),
                mood: "sad".into(),
                notes: None,
            })
            .await;

        let (_, listed) = send(app(&state), get_request("/api/mood")).await;
        assert_eq!(listed, serde_json::json!([]));

        let (status, recent) = send(app(&state), get_request("/api/mood/recent?days=0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(recent.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn recent_rejects_bad_days() {
        let state = state_with(Arc::new(StubGenerator::default()));
        let (status, json) = send(app(&state), get_request("/api/mood/recent?days=-1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }
}
