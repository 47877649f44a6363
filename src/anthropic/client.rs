//! Anthropic API client.
//!
//! This module provides:
//! - HTTP client for the Anthropic Messages API
//! - Status-code to error mapping
//! - Response envelope extraction
//!
//! The client makes exactly one outbound request per call and performs
//! no retries; the classification service owns the fallback policy.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::config::ClientConfig;
use super::types::{ApiMessage, ApiRequest, ApiResponse, ContentBlock};
use crate::config::SecretString;
use crate::error::TransportError;
use crate::traits::CompletionClient;

/// Anthropic API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic API client.
#[derive(Debug)]
pub struct AnthropicClient {
    client: Client,
    api_key: SecretString,
    config: ClientConfig,
}

impl AnthropicClient {
    /// Create a new Anthropic client.
    ///
    /// The API key and all endpoint parameters are injected here; nothing
    /// is read from the environment inside the call path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(api_key: SecretString, config: ClientConfig) -> Result<Self, TransportError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            TransportError::InvalidRequest {
                message: format!("Failed to create HTTP client: {e}"),
            }
        })?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a single Messages API request and return the reply text.
    async fn execute_once(&self, prompt: String) -> Result<String, TransportError> {
        let url = format!("{}/messages", self.config.base_url);
        let request = ApiRequest::new(
            &self.config.model,
            self.config.max_tokens,
            vec![ApiMessage::user(prompt)],
        );
        let start = std::time::Instant::now();

        tracing::debug!(
            url = %url,
            model = %request.model,
            max_tokens = request.max_tokens,
            timeout_ms = self.config.timeout_ms,
            "Starting Anthropic API request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.api_key.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                if e.is_timeout() {
                    tracing::error!(
                        url = %url,
                        elapsed_ms,
                        timeout_ms = self.config.timeout_ms,
                        "Anthropic API request timed out"
                    );
                    TransportError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                    }
                } else {
                    tracing::error!(url = %url, elapsed_ms, error = %e, "Anthropic API request failed");
                    TransportError::Network {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms,
            "Anthropic API response received"
        );

        if status.as_u16() == 401 {
            return Err(TransportError::AuthenticationFailed);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ApiResponse =
            response
                .json()
                .await
                .map_err(|e| TransportError::MalformedEnvelope {
                    message: format!("Failed to decode response: {e}"),
                })?;

        tracing::debug!(
            input_tokens = body.usage.input_tokens,
            output_tokens = body.usage.output_tokens,
            "Anthropic API usage"
        );

        Self::extract_text(body)
    }

    /// Extract the reply text from the response envelope.
    fn extract_text(response: ApiResponse) -> Result<String, TransportError> {
        let mut raw_text = String::new();
        for block in response.content {
            if let ContentBlock::Text { text } = block {
                if !raw_text.is_empty() {
                    raw_text.push('\n');
                }
                raw_text.push_str(&text);
            }
        }

        if raw_text.is_empty() {
            return Err(TransportError::MalformedEnvelope {
                message: "No text content in response".to_string(),
            });
        }

        Ok(raw_text)
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(&self, prompt: String) -> Result<String, TransportError> {
        self.execute_once(prompt).await
    }
}
