//! Anthropic Messages API request and response types.
//!
//! Only the subset of the wire format this service uses: a single
//! user-role text message out, text content blocks back.

use serde::{Deserialize, Serialize};

/// Request to the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct ApiRequest {
    /// Model identifier (e.g., "claude-sonnet-4-20250514").
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Conversation messages.
    pub messages: Vec<ApiMessage>,
}

impl ApiRequest {
    /// Create a new API request.
    #[must_use]
    pub fn new(model: impl Into<String>, max_tokens: u32, messages: Vec<ApiMessage>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages,
        }
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    /// Role: "user" or "assistant".
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ApiMessage {
    /// Create a user message with text content.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Successful response envelope from the Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Content blocks of the reply.
    pub content: Vec<ContentBlock>,
    /// Token accounting.
    #[serde(default)]
    pub usage: Usage,
}

/// A content block in the response.
///
/// Block types this service does not request (thinking, tool use) are
/// tolerated and skipped rather than failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    /// Text content.
    #[serde(rename = "text")]
    Text {
        /// The text content.
        text: String,
    },
    /// Any other block type.
    #[serde(other)]
    Other,
}

/// Token usage reported by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the request.
    #[serde(default)]
    pub input_tokens: u64,
    /// Tokens generated in the reply.
    #[serde(default)]
    pub output_tokens: u64,
}
