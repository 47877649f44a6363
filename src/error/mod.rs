//! Error types for the classification service.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors (binary startup path)
//! - [`InvalidInputError`]: Caller precondition violation (empty input)
//! - [`TransportError`]: Failures talking to the Anthropic API
//! - [`ParseError`]: Completion text that fails schema validation
//! - [`ConfigError`]: Configuration errors
//!
//! `TransportError` and `ParseError` are recovered inside
//! [`ClassificationService`](crate::classify::ClassificationService) and
//! converted into the fallback verdict; they never cross the service
//! boundary. Only `InvalidInputError` is surfaced to callers, as an HTTP
//! 400 at the request boundary.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// Returned by the binary startup path (configuration loading, client
/// construction, server I/O). Per-request failures never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport layer error (client construction).
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Server I/O error.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Caller precondition violation: empty or whitespace-only input.
///
/// This is the only error the classification service surfaces to its
/// caller; everything downstream of a valid request degrades to the
/// fallback verdict instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Input is required")]
pub struct InvalidInputError;

/// Failures communicating with the Anthropic API.
///
/// Every variant is absorbed by the service layer and converted into the
/// fallback verdict; the variants exist so the failure cause is precise
/// in logs and in tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Authentication failed due to invalid API key.
    #[error("Authentication failed: invalid API key")]
    AuthenticationFailed,

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Network communication error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// Non-success HTTP status from the API.
    #[error("API error: status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Response body (may be truncated or empty).
        body: String,
    },

    /// Response envelope was missing the expected content.
    #[error("Malformed response envelope: {message}")]
    MalformedEnvelope {
        /// Description of what was missing or undecodable.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Invalid client configuration: {message}")]
    InvalidRequest {
        /// Description of what's invalid.
        message: String,
    },
}

/// Completion text that fails the five-field verdict schema.
///
/// Every variant carries the raw completion text for diagnostics;
/// partial or best-guess verdicts are never produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The (fence-stripped) text is not a single JSON object.
    #[error("Response is not a JSON object: {message}")]
    NotJson {
        /// Description of the JSON error.
        message: String,
        /// The raw completion text.
        raw: String,
    },

    /// A required field is absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
        /// The raw completion text.
        raw: String,
    },

    /// A field is present but has the wrong type or an out-of-enum value.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// The field name.
        field: String,
        /// Why the value is invalid.
        reason: String,
        /// The raw completion text.
        raw: String,
    },
}

impl ParseError {
    /// The raw completion text that failed validation.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        match self {
            Self::NotJson { raw, .. }
            | Self::MissingField { raw, .. }
            | Self::InvalidValue { raw, .. } => raw,
        }
    }
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
