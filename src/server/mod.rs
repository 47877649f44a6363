//! HTTP boundary for the classification service.
//!
//! A small axum surface mirroring the service contract:
//! - `POST /api/check-safety` with `{"input": "..."}` returns a verdict
//!   (real or fallback — identical shape either way)
//! - missing or empty input is the one caller-visible error, an HTTP 400
//! - `GET /health` for liveness probes
//!
//! CORS is permissive: the presentation layer is a browser app served
//! from elsewhere.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::classify::{ClassificationRequest, ClassificationService, ClassificationVerdict};
use crate::error::{AppError, InvalidInputError};
use crate::traits::CompletionClient;

/// Inbound request body.
#[derive(Debug, Deserialize)]
pub struct CheckSafetyBody {
    /// Free-text substance description.
    #[serde(default)]
    pub input: String,
}

/// Error body returned for a precondition violation.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for InvalidInputError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// `POST /api/check-safety` handler.
///
/// Validates the request boundary, then delegates to the always-succeeds
/// classification service. The response shape is a verdict for every
/// valid request; only empty input gets an error response.
async fn check_safety<C: CompletionClient>(
    State(service): State<Arc<ClassificationService<C>>>,
    Json(body): Json<CheckSafetyBody>,
) -> Result<Json<ClassificationVerdict>, InvalidInputError> {
    let request = ClassificationRequest::new(body.input)?;
    let verdict = service.classify(&request).await;
    Ok(Json(verdict))
}

/// `GET /health` handler.
async fn health() -> StatusCode {
    StatusCode::OK
}

/// Build the application router.
#[must_use]
pub fn router<C: CompletionClient + 'static>(service: Arc<ClassificationService<C>>) -> Router {
    Router::new()
        .route("/api/check-safety", post(check_safety::<C>))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Bind the listener and serve until shutdown.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the listener cannot be bound or the
/// server fails while running.
pub async fn serve<C: CompletionClient + 'static>(
    listen_addr: &str,
    service: Arc<ClassificationService<C>>,
) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(addr = %listen_addr, "HTTP server listening");
    axum::serve(listener, router(service)).await?;
    Ok(())
}
