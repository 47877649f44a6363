//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//! - Secure API key storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use g6pd_safety::config::{Config, SecretString, DEFAULT_MODEL};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     api_key: SecretString::new("sk-ant-example-key"),
//!     base_url: "https://api.anthropic.com/v1".to_string(),
//!     model: DEFAULT_MODEL.to_string(),
//!     max_output_tokens: 1000,
//!     request_timeout_ms: 30000,
//!     listen_addr: "127.0.0.1:8080".to_string(),
//!     log_level: "info".to_string(),
//! };
//!
//! // API key is protected from accidental logging
//! let debug = format!("{:?}", config);
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("sk-ant-example-key"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_OUTPUT_TOKENS_LIMIT, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use crate::error::ConfigError;

/// Default Anthropic API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Default Anthropic model.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default maximum output tokens for a classification completion.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default listen address for the HTTP server.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment
/// variables. The `api_key` field uses [`SecretString`] to prevent
/// accidental logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Anthropic API key (protected from logging via [`SecretString`]).
    pub api_key: SecretString,
    /// Anthropic API base URL.
    pub base_url: String,
    /// Anthropic model to use.
    pub model: String,
    /// Maximum output tokens per completion.
    pub max_output_tokens: u32,
    /// Request timeout in milliseconds for the remote call.
    pub request_timeout_ms: u64,
    /// Listen address for the HTTP server.
    pub listen_addr: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ANTHROPIC_API_KEY`: Anthropic API key
    ///
    /// Optional environment variables (with defaults):
    /// - `ANTHROPIC_BASE_URL`: API base URL (default: `https://api.anthropic.com/v1`)
    /// - `ANTHROPIC_MODEL`: Model to use (default: `claude-sonnet-4-20250514`)
    /// - `MAX_OUTPUT_TOKENS`: Output token budget (default: `1000`)
    /// - `REQUEST_TIMEOUT_MS`: Remote call timeout (default: `30000`)
    /// - `LISTEN_ADDR`: HTTP listen address (default: `127.0.0.1:8080`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `ANTHROPIC_API_KEY` is missing
    /// - a numeric variable is not a valid positive integer
    /// - any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let api_key =
            std::env::var("ANTHROPIC_API_KEY").map_err(|_| ConfigError::MissingRequired {
                var: "ANTHROPIC_API_KEY".into(),
            })?;

        let base_url =
            std::env::var("ANTHROPIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = std::env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let max_output_tokens = parse_env_u32("MAX_OUTPUT_TOKENS", DEFAULT_MAX_OUTPUT_TOKENS)?;
        let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;
        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let config = Self {
            api_key: SecretString::new(api_key),
            base_url,
            model,
            max_output_tokens,
            request_timeout_ms,
            listen_addr,
            log_level,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse an optional u64 environment variable with a default.
fn parse_env_u64(var: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.into(),
            reason: format!("not a valid integer: {value}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Parse an optional u32 environment variable with a default.
fn parse_env_u32(var: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.into(),
            reason: format!("not a valid integer: {value}"),
        }),
        Err(_) => Ok(default),
    }
}
