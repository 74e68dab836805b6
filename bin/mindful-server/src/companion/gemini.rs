//! Minimal client for the Gemini `generateContent` REST endpoint.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeminiConfig;
use crate::entities::{ChatMessage, Role};

use super::GenerationError;

/// Only the most recent turns are forwarded to bound prompt size.
const MAX_HISTORY_TURNS: usize = 20;

const SYSTEM_PROMPT: &str = "You are a warm, empathetic mental health companion. \
Offer three to five practical, supportive coping ideas in simple language and keep \
the answer under 120 words. Vary your suggestions instead of repeating earlier ones. \
You are not a therapist and never diagnose. If the person mentions self-harm or \
suicide, gently encourage them to call or text 988 or text HOME to 741741 right away.";

/// Does not derive `Debug` so the API key never ends up in logs.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Returns `None` when no API key is configured.
    pub fn from_config(cfg: &GeminiConfig) -> Option<Self> {
        let api_key = cfg.api_key.clone()?;
        Some(Self {
            http: reqwest::Client::new(),
            api_key,
            model: cfg.model.clone(),
            base_url: cfg.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Generate a reply to `message` given the prior conversation.
    pub async fn generate(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<String, GenerationError> {
        let body = build_request(message, history);

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed.text();
        debug!(model = %self.model, output_len = text.len(), "gemini reply received");
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyReply);
        }
        Ok(text.trim().to_owned())
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

fn content(role: &str, text: &str) -> Content {
    Content {
        role: Some(role.to_owned()),
        parts: vec![Part { text: text.to_owned() }],
    }
}

fn build_request(message: &str, history: &[ChatMessage]) -> GenerateRequest {
    let skip = history.len().saturating_sub(MAX_HISTORY_TURNS);
    let mut contents: Vec<Content> = history
        .iter()
        .skip(skip)
        .map(|m| {
            let role = match m.role {
                Role::User => "user",
                Role::Assistant => "model",
            };
            content(role, &m.content)
        })
        .collect();
    contents.push(content("user", message));

    GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: SYSTEM_PROMPT.to_owned() }],
        },
        contents,
        generation_config: GenerationConfig {
            max_output_tokens: 300,
            temperature: 0.9,
        },
    }
}
