//! Request / response types for the chat API (`/api/chat/...`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::companion::{CompanionReply, CrisisResource};
use crate::entities::ChatMessage;

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatRequest {
    /// What the user said.
    #[serde(default)]
    #[validate(
        required(message = "message is required"),
        length(min = 1, max = 4000, message = "message must be 1-4000 characters")
    )]
    pub message: Option<String>,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Assistant reply.
    pub response: String,
    pub is_crisis_detected: bool,
    /// Support resources; `null` unless a crisis was detected.
    pub crisis_resources: Option<Vec<CrisisResource>>,
    pub suggested_actions: Vec<String>,
}

impl From<CompanionReply> for ChatResponse {
    fn from(reply: CompanionReply) -> Self {
        Self {
            response: reply.message,
            is_crisis_detected: reply.is_crisis_detected,
            crisis_resources: reply.crisis_resources,
            suggested_actions: reply.suggested_actions,
        }
    }
}

/// Request body for the stateless `POST /api/respond`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RespondRequest {
    /// Text to answer; a missing field is treated as empty.
    #[serde(default)]
    #[validate(length(max = 4000, message = "text must be at most 4000 characters"))]
    pub text: String,
}

/// Response body for `POST /api/respond`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RespondResponse {
    pub response: String,
}

/// A stored chat message as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    /// `"user"` or `"assistant"`.
    pub role: String,
    pub content: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_crisis_detected: Option<bool>,
}

/// Response body for `GET /api/chat/history`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatHistoryResponse {
    pub messages: Vec<MessageResponse>,
}

impl ChatMessage {
    pub fn to_response(&self) -> MessageResponse {
        MessageResponse {
            id: self.id.clone(),
            role: self.role.to_string(),
            content: self.content.clone(),
            timestamp: self.timestamp.to_rfc3339(),
            is_crisis_detected: self.is_crisis_detected,
        }
    }
}
