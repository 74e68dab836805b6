//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection, panic capture)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `MINDFUL_ENABLE_SWAGGER=false`)
//! - Health / heartbeat route
//! - Wellness `/api` routes (chat, mood, support resources)

mod api;
pub mod doc;
mod health;

use crate::middleware::{cors, panic, trace};
use crate::state::AppState;
use axum::{Router, middleware};
use std::sync::Arc;
use tower::ServiceBuilder;
use utoipa_swagger_ui::SwaggerUi;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(health::router())
        .nest("/api", api::router());

    if state.config.enable_swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()),
        );
    }

    app
        // Outermost layers execute first on the way in.
        .layer(
            ServiceBuilder::new()
                .layer(panic::catch_panic_layer())
                .layer(cors::cors_layer(state.clone())),
        )
        .layer(middleware::from_fn_with_state(state.clone(), trace::trace_middleware))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared helpers for router tests.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::companion::{ChatGenerator, CompanionReply, GenerationError, crisis_resources};
    use crate::config::Config;
    use crate::entities::ChatMessage;
    use crate::state::AppState;

    /// Records every call and answers with a canned reply.
    #[derive(Default)]
    pub struct StubGenerator {
        pub calls: Mutex<Vec<(String, usize)>>,
        pub fail: bool,
    }

    #[async_trait]
    impl ChatGenerator for StubGenerator {
        async fn generate(
            &self,
            message: &str,
            history: &[ChatMessage],
        ) -> Result<CompanionReply, GenerationError> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((message.to_owned(), history.len()));
            }
            if self.fail {
                return Err(GenerationError::EmptyReply);
            }
            let crisis = message.contains("crisis");
            Ok(CompanionReply {
                message: format!("echo: {message}"),
                is_crisis_detected: crisis,
                crisis_resources: crisis.then(crisis_resources),
                suggested_actions: vec!["Log your mood".into()],
            })
        }
    }

    pub fn state_with(generator: Arc<StubGenerator>) -> Arc<AppState> {
        let config = Config {
            enable_swagger: false,
            ..Config::default()
        };
        Arc::new(AppState::new(config, generator))
    }

    pub fn app(state: &Arc<AppState>) -> Router {
        super::build(Arc::clone(state))
    }

    pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.expect("infallible router");
        let status = resp.status();
        let bytes = resp
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, body)
    }

    pub fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    pub fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .expect("request")
    }
}
