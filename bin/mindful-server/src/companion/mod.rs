//! Chat generation.
//!
//! [`ChatGenerator`] is the seam the chat route calls through. [`Companion`]
//! is the production implementation: it flags crisis language locally, then
//! asks the hosted Gemini model for a reply. When no API key is configured, or
//! the model call fails or comes back empty, it answers from curated coping
//! guides instead, so [`Companion`] itself never returns an error.

pub mod crisis;
pub mod gemini;
pub mod guides;
pub mod tips;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::GeminiConfig;
use crate::entities::ChatMessage;

pub use crisis::{CrisisResource, crisis_resources, detect_crisis};
pub use gemini::GeminiClient;
pub use tips::{DailyTip, daily_tip};

const HOTLINE_FOOTER: &str =
    "If things feel overwhelming, you can call or text 988 or text HOME to 741741.";

const CRISIS_REPLY: &str = "It sounds like you're carrying something really painful right now, \
and I'm glad you told me. You don't have to face this alone. Please reach out to someone now: \
call or text 988 (Suicide & Crisis Lifeline) or text HOME to 741741. If you're in immediate \
danger, call 911.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request to language model failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("language model returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("language model returned an empty reply")]
    EmptyReply,
}

/// Reply produced for one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanionReply {
    pub message: String,
    pub is_crisis_detected: bool,
    /// Present only when crisis language was detected.
    pub crisis_resources: Option<Vec<CrisisResource>>,
    pub suggested_actions: Vec<String>,
}

#[async_trait]
pub trait ChatGenerator: Send + Sync {
    /// Produce a reply to `message`. `history` is the prior conversation in
    /// chronological order and does not include `message`.
    async fn generate(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<CompanionReply, GenerationError>;
}

/// Default [`ChatGenerator`].
pub struct Companion {
    gemini: Option<GeminiClient>,
}

impl Companion {
    pub fn from_config(cfg: &GeminiConfig) -> Self {
        match GeminiClient::from_config(cfg) {
            Some(client) => {
                info!(model = %cfg.model, "hosted language model enabled");
                Self {
                    gemini: Some(client),
                }
            }
            None => {
                info!("no GEMINI_API_KEY set; replies come from curated guides");
                Self::offline()
            }
        }
    }

    /// Guide-only companion, never calls out to the network.
    pub fn offline() -> Self {
        Self { gemini: None }
    }
}

#[async_trait]
impl ChatGenerator for Companion {
    async fn generate(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<CompanionReply, GenerationError> {
        let is_crisis_detected = detect_crisis(message);
        let category = guides::classify(message);
        debug!(%category, is_crisis_detected, "classified chat message");

        let hosted = match &self.gemini {
            Some(client) => match client.generate(message, history).await {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(error = %e, "hosted model failed; answering from guides");
                    None
                }
            },
            None => None,
        };

        let reply = match hosted {
            Some(text) => text,
            None if is_crisis_detected => CRISIS_REPLY.to_owned(),
            None => format!("{}\n\n{}", guides::pick_tip(category, message), HOTLINE_FOOTER),
        };

        let suggested_actions = if is_crisis_detected {
            vec![
                "Call or text 988".to_owned(),
                "Text HOME to 741741".to_owned(),
                "Reach out to someone you trust".to_owned(),
            ]
        } else {
            category.suggested_actions()
        };

        Ok(CompanionReply {
            message: reply,
            is_crisis_detected,
            crisis_resources: is_crisis_detected.then(crisis_resources),
            suggested_actions,
        })
    }
}
