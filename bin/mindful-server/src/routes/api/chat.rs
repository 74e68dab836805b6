//! Companion chat routes.
//!
//! A user has a single chat session. Each `POST /api/chat` loads the prior
//! messages, asks the [`crate::companion::ChatGenerator`] for a reply, then
//! writes the prior messages plus the new user/assistant pair back in one
//! upsert. Generator failures leave the stored session untouched.
//!
//! `POST /api/respond` is the stateless variant: one text in, one reply out,
//! nothing read from or written to storage.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::companion::CrisisResource;
use crate::entities::{ChatMessage, SessionStore};
use crate::error::{ServerError, tagged};
use crate::extract::ValidatedJson;
use crate::schemas::api::chat::{
    ChatHistoryResponse, ChatRequest, ChatResponse, MessageResponse, RespondRequest,
    RespondResponse,
};
use crate::state::AppState;

const CHAT_TAG: &str = "chat";
const RESPOND_TAG: &str = "respond";

#[derive(OpenApi)]
#[openapi(
    paths(send_message, chat_history, respond),
    components(schemas(
        ChatRequest,
        ChatResponse,
        ChatHistoryResponse,
        MessageResponse,
        RespondRequest,
        RespondResponse,
        CrisisResource
    ))
)]
pub struct ChatApi;

/// Register chat routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(send_message))
        .route("/chat/history", get(chat_history))
        .route("/respond", post(respond))
}

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Companion reply", body = ChatResponse),
        (status = 400, description = "Missing or invalid message"),
        (status = 500, description = "Reply generation failed"),
    )
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    body: Result<ValidatedJson<ChatRequest>, ServerError>,
) -> Result<Json<ChatResponse>, ServerError> {
    let ValidatedJson(req) = body.map_err(tagged(CHAT_TAG))?;
    let Some(message) = req.message else {
        return Err(tagged(CHAT_TAG)(ServerError::BadRequest(
            "message is required".into(),
        )));
    };

    let user_id = state.demo_user_id();
    let mut messages = state
        .store
        .get_chat_session(user_id)
        .await
        .map(|s| s.messages)
        .unwrap_or_default();

    let reply = state
        .generator
        .generate(&message, &messages)
        .await
        .map_err(ServerError::from)
        .map_err(tagged(CHAT_TAG))?;

    messages.push(ChatMessage::user(message));
    messages.push(ChatMessage::assistant(
        reply.message.clone(),
        reply.is_crisis_detected,
    ));
    let session = state.store.update_chat_session(user_id, messages).await;

    info!(
        session_id = %session.id,
        session_started = %session.created_at,
        message_count = session.messages.len(),
        is_crisis_detected = reply.is_crisis_detected,
        "chat turn stored"
    );

    Ok(Json(reply.into()))
}

#[utoipa::path(
    get,
    path = "/api/chat/history",
    tag = "chat",
    responses(
        (status = 200, description = "Messages of the demo user's session", body = ChatHistoryResponse),
    )
)]
pub async fn chat_history(State(state): State<Arc<AppState>>) -> Json<ChatHistoryResponse> {
    let messages = state
        .store
        .get_chat_session(state.demo_user_id())
        .await
        .map(|s| s.messages.iter().map(ChatMessage::to_response).collect())
        .unwrap_or_default();
    Json(ChatHistoryResponse { messages })
}

#[utoipa::path(
    post,
    path = "/api/respond",
    tag = "chat",
    request_body = RespondRequest,
    responses(
        (status = 200, description = "One-off companion reply", body = RespondResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Reply generation failed"),
    )
)]
pub async fn respond(
    State(state): State<Arc<AppState>>,
    body: Result<ValidatedJson<RespondRequest>, ServerError>,
) -> Result<Json<RespondResponse>, ServerError> {
    let ValidatedJson(req) = body.map_err(tagged(RESPOND_TAG))?;
    let reply = state
        .generator
        .generate(&req.text, &[])
        .await
        .map_err(ServerError::from)
        .map_err(tagged(RESPOND_TAG))?;
    info!(is_crisis_detected = reply.is_crisis_detected, "stateless reply generated");
    Ok(Json(RespondResponse {
        response: reply.message,
    }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
