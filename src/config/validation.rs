//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Maximum allowed output token budget.
pub const MAX_OUTPUT_TOKENS_LIMIT: u32 = 8192;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `ANTHROPIC_API_KEY` must not be empty
/// - `REQUEST_TIMEOUT_MS` must be between 1000 and 300000
/// - `MAX_OUTPUT_TOKENS` must be between 1 and 8192
/// - `LISTEN_ADDR` must parse as a socket address
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // API key must not be empty
    if config.api_key.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "ANTHROPIC_API_KEY".into(),
            reason: "must not be empty".into(),
        });
    }

    // Timeout must be reasonable (1s to 5m)
    if config.request_timeout_ms < MIN_TIMEOUT_MS || config.request_timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    if config.max_output_tokens == 0 || config.max_output_tokens > MAX_OUTPUT_TOKENS_LIMIT {
        return Err(ConfigError::InvalidValue {
            var: "MAX_OUTPUT_TOKENS".into(),
            reason: format!("must be between 1 and {MAX_OUTPUT_TOKENS_LIMIT}"),
        });
    }

    if config.listen_addr.parse::<std::net::SocketAddr>().is_err() {
        return Err(ConfigError::InvalidValue {
            var: "LISTEN_ADDR".into(),
            reason: format!("not a valid socket address: {}", config.listen_addr),
        });
    }

    Ok(())
}
