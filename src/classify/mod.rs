//! Substance safety classification.
//!
//! The core of the repository: [`ClassificationService`] builds the
//! prompt, invokes the completion model once, validates the reply, and
//! degrades to the fixed fallback verdict on any transport or parse
//! failure. `classify` is total — it always produces a verdict for a
//! valid request.

mod parsing;
mod types;

pub use parsing::parse_verdict;
pub use types::{ClassificationRequest, ClassificationVerdict, Safety, Severity, FALLBACK_REASON};

use crate::prompts::classification_prompt;
use crate::traits::CompletionClient;

/// Orchestrates one classification exchange per call.
///
/// Stateless across invocations: no cache, no rate limiter, no shared
/// mutable state. Safe to share behind an `Arc` and call concurrently.
#[derive(Debug)]
pub struct ClassificationService<C> {
    client: C,
}

impl<C: CompletionClient> ClassificationService<C> {
    /// Create a service over a completion client.
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Classify a substance, always returning a verdict.
    ///
    /// One transport attempt and one parse attempt, no retry loop: the
    /// fallback is cheap and instantaneous, so retrying a possibly-slow
    /// remote call is not worth the latency for a consultative lookup.
    /// A validated verdict is returned unchanged; transport and parse
    /// failures both degrade to [`ClassificationVerdict::fallback`].
    pub async fn classify(&self, request: &ClassificationRequest) -> ClassificationVerdict {
        let prompt = classification_prompt(request.input());

        let raw_text = match self.client.complete(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    input = request.input(),
                    error = %e,
                    "Remote invocation failed; returning fallback verdict"
                );
                return ClassificationVerdict::fallback(request.input());
            }
        };

        match parse_verdict(&raw_text) {
            Ok(verdict) => {
                tracing::info!(
                    input = request.input(),
                    item = %verdict.item,
                    safety = verdict.safety.as_str(),
                    severity = verdict.severity.as_str(),
                    "Classification succeeded"
                );
                verdict
            }
            Err(e) => {
                tracing::warn!(
                    input = request.input(),
                    error = %e,
                    "Response failed validation; returning fallback verdict"
                );
                tracing::debug!(raw = e.raw_text(), "Unparseable completion text");
                ClassificationVerdict::fallback(request.input())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::traits::MockCompletionClient;
    use pretty_assertions::assert_eq;

    fn request(input: &str) -> ClassificationRequest {
        ClassificationRequest::new(input).unwrap()
    }

    #[tokio::test]
    async fn test_classify_returns_validated_verdict_unchanged() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(1).returning(|_| {
            Ok(r#"{"item":"Fava Beans","safety":"unsafe","reason":"Contains compounds that trigger hemolysis","alternatives":["kidney beans","chickpeas"],"severity":"high"}"#.to_string())
        });

        let service = ClassificationService::new(client);
        let verdict = service.classify(&request("fava beans")).await;

        assert_eq!(verdict.item, "Fava Beans");
        assert_eq!(verdict.safety, Safety::Unsafe);
        assert_eq!(verdict.alternatives, vec!["kidney beans", "chickpeas"]);
        assert_eq!(verdict.severity, Severity::High);
    }

    #[tokio::test]
    async fn test_classify_sends_prompt_containing_input() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|prompt| prompt.contains("\"mystery tea\""))
            .times(1)
            .returning(|_| {
                Err(TransportError::Network {
                    message: "down".to_string(),
                })
            });

        let service = ClassificationService::new(client);
        let _ = service.classify(&request("mystery tea")).await;
    }

    #[tokio::test]
    async fn test_classify_transport_error_yields_exact_fallback() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(1).returning(|_| {
            Err(TransportError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            })
        });

        let service = ClassificationService::new(client);
        let verdict = service.classify(&request("aspirin")).await;

        assert_eq!(verdict, ClassificationVerdict::fallback("aspirin"));
        assert_eq!(verdict.reason, FALLBACK_REASON);
    }

    #[tokio::test]
    async fn test_classify_timeout_yields_fallback() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_| Err(TransportError::Timeout { timeout_ms: 30000 }));

        let service = ClassificationService::new(client);
        let verdict = service.classify(&request("henna")).await;

        assert_eq!(verdict.safety, Safety::Caution);
        assert_eq!(verdict.severity, Severity::Medium);
    }

    #[tokio::test]
    async fn test_classify_unparseable_reply_yields_fallback() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_| Ok("Sorry, I can't format that as JSON.".to_string()));

        let service = ClassificationService::new(client);
        let verdict = service.classify(&request("menthol")).await;

        assert_eq!(verdict, ClassificationVerdict::fallback("menthol"));
    }

    #[tokio::test]
    async fn test_classify_out_of_enum_reply_yields_fallback_not_partial() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(1).returning(|_| {
            Ok(r#"{"item":"Menthol","safety":"unsure","reason":"unclear","alternatives":[],"severity":"medium"}"#.to_string())
        });

        let service = ClassificationService::new(client);
        let verdict = service.classify(&request("menthol")).await;

        // The model's "item" is discarded along with the rest of the reply
        assert_eq!(verdict.item, "menthol");
        assert_eq!(verdict.safety, Safety::Caution);
    }

    #[tokio::test]
    async fn test_classify_accepts_fence_wrapped_reply() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(1).returning(|_| {
            Ok("```json\n{\"item\":\"Rice\",\"safety\":\"safe\",\"reason\":\"No known G6PD concern\",\"alternatives\":[],\"severity\":\"low\"}\n```".to_string())
        });

        let service = ClassificationService::new(client);
        let verdict = service.classify(&request("rice")).await;

        assert_eq!(verdict.safety, Safety::Safe);
        assert_eq!(verdict.item, "Rice");
    }

    #[tokio::test]
    async fn test_empty_input_never_reaches_the_client() {
        // The request boundary rejects before classify can be called
        assert!(ClassificationRequest::new("   ").is_err());

        let mut client = MockCompletionClient::new();
        client.expect_complete().times(0);
        let _service = ClassificationService::new(client);
    }
}
