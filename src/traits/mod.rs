//! Trait definitions for mockable dependencies.
//!
//! [`CompletionClient`] abstracts the remote completion model so the
//! classification service can be exercised in tests without network
//! access. The trait is annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates a mock implementation automatically.

use async_trait::async_trait;

use crate::error::TransportError;

/// Remote completion model abstraction.
///
/// Implementations perform exactly one outbound request per call and
/// never retry internally; retry and fallback policy belongs to the
/// service layer so the failure boundary stays observable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a prompt to the completion model and return the raw reply text.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] for network failure, timeout,
    /// authentication failure, non-success HTTP status, or a response
    /// envelope with no usable content.
    async fn complete(&self, prompt: String) -> Result<String, TransportError>;
}
