//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! Internal errors are logged with full detail by [`tagged`] but only a
//! generic message is returned to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::companion::GenerationError;

/// All errors that can occur in the mindful-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The chat generator failed to produce a reply.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Generation(_) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let client_message = match &self {
            ServerError::BadRequest(m) => m.clone(),
            ServerError::Generation(_) => "failed to process message".to_owned(),
            ServerError::Internal(_) => "internal server error".to_owned(),
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(e: anyhow::Error) -> Self {
        ServerError::Internal(format!("{e:#}"))
    }
}

/// Log `err` once under an endpoint tag and hand it back for `?` propagation.
///
/// Client errors are logged at `warn`, everything else at `error`. The
/// response conversion itself does not log.
pub fn tagged(endpoint: &'static str) -> impl Fn(ServerError) -> ServerError {
    move |err| {
        if err.status().is_server_error() {
            error!(endpoint, error = %err, "request failed");
        } else {
            warn!(endpoint, error = %err, "request rejected");
        }
        err
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn bad_request_maps_to_400() {
        let resp = ServerError::BadRequest("nope".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generation_failure_maps_to_500() {
        let err = ServerError::from(GenerationError::EmptyReply);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    #[traced_test]
    fn tagged_failure_is_logged_once() {
        let err = tagged("chat")(ServerError::Internal("disk on fire".into()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        logs_assert(|lines: &[&str]| {
            match lines.iter().filter(|l| l.contains("disk on fire")).count() {
                1 => Ok(()),
                n => Err(format!("expected one log line, got {n}")),
            }
        });
        assert!(logs_contain("endpoint=\"chat\""));
    }

    #[test]
    #[traced_test]
    fn untagged_response_does_not_log() {
        let resp = ServerError::from(GenerationError::EmptyReply).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!logs_contain("empty reply"));
    }

    #[test]
    fn anyhow_becomes_internal() {
        let err: ServerError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ServerError::Internal(ref m) if m == "boom"));
    }
}
