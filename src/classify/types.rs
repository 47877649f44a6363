//! Classification request and verdict types.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// Fixed reason attached to the fallback verdict.
pub const FALLBACK_REASON: &str =
    "Unable to verify safety at this time. Please consult with a healthcare provider.";

/// A validated classification request.
///
/// Construction is the request boundary of the service: the input is
/// trimmed and empty or whitespace-only text is rejected here, before
/// any prompt is built or any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    input: String,
}

impl ClassificationRequest {
    /// Create a request from free text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if the input is empty after trimming.
    pub fn new(input: impl Into<String>) -> Result<Self, InvalidInputError> {
        let input = input.into();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidInputError);
        }
        Ok(Self {
            input: trimmed.to_string(),
        })
    }

    /// The trimmed substance description.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Safety classification for a substance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    /// No known G6PD concern.
    Safe,
    /// Known trigger; avoid.
    Unsafe,
    /// Uncertain or dose-dependent risk.
    Caution,
}

impl Safety {
    /// Lowercase wire name of the value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Unsafe => "unsafe",
            Self::Caution => "caution",
        }
    }
}

/// Severity of the risk if the substance is consumed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor risk.
    Low,
    /// Moderate risk.
    Medium,
    /// Serious risk.
    High,
}

impl Severity {
    /// Lowercase wire name of the value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Structured safety verdict for a substance.
///
/// The sole output type of the classification service. Every verdict
/// handed to a caller satisfies this five-field schema, whether it came
/// from the model or was synthesized as the fallback. Immutable once
/// constructed; not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationVerdict {
    /// Substance name as identified by the model.
    pub item: String,
    /// Safety classification.
    pub safety: Safety,
    /// Brief rationale (never empty).
    pub reason: String,
    /// Suggested substitutes (may be empty).
    pub alternatives: Vec<String>,
    /// Risk severity.
    pub severity: Severity,
}

impl ClassificationVerdict {
    /// The fixed fallback verdict for a substance.
    ///
    /// Synthesized whenever the remote path fails. When in doubt the
    /// service never claims `safe`; undecidable input degrades to
    /// `caution` with medium severity.
    #[must_use]
    pub fn fallback(input: &str) -> Self {
        Self {
            item: input.to_string(),
            safety: Safety::Caution,
            reason: FALLBACK_REASON.to_string(),
            alternatives: Vec::new(),
            severity: Severity::Medium,
        }
    }
}
