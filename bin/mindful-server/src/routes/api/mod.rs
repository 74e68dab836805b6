pub mod chat;
pub mod mood;
pub mod support;

use crate::state::AppState;
use utoipa::OpenApi;

use axum::Router;
use std::sync::Arc;

/// Routes nested under `/api`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(chat::router())
        .merge(mood::router())
        .merge(support::router())
}

pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut spec = chat::ChatApi::openapi();
    spec.merge(mood::MoodApi::openapi());
    spec.merge(support::SupportApi::openapi());
    spec
}
