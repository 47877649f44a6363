//! Anthropic API integration.
//!
//! This module provides the remote invoker for the classification
//! service:
//! - [`AnthropicClient`]: HTTP client for the Messages API
//! - [`ClientConfig`]: injected endpoint configuration
//! - Request/response wire types

mod client;
mod config;
mod types;

pub use client::AnthropicClient;
pub use config::ClientConfig;
pub use types::{ApiMessage, ApiRequest, ApiResponse, ContentBlock, Usage};
