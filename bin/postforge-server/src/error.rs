//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! **Security note:** internal failures are logged with full detail but only
//! a generic message is returned to the caller, so upstream payloads or
//! implementation details never leak to clients.  Each failed request
//! produces exactly one log record, emitted here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use postforge_core::GenerateError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// All errors that can occur in the postforge-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Propagated from the generation pipeline.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// The caller sent a malformed request body.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            ServerError::BadRequest(m) => {
                warn!(message = %m, "rejected malformed request");
                (StatusCode::BAD_REQUEST, m.clone())
            }
            ServerError::Generate(e) => match e {
                GenerateError::InvalidInput(m) => {
                    warn!(message = %m, "rejected invalid generation request");
                    (StatusCode::BAD_REQUEST, m.clone())
                }
                GenerateError::ConfigurationMissing => {
                    error!("generation failed: no upstream API key configured");
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
                GenerateError::UpstreamTimeout => {
                    error!("generation failed: upstream call timed out");
                    (StatusCode::GATEWAY_TIMEOUT, e.to_string())
                }
                GenerateError::UpstreamUnavailable => {
                    error!("generation failed: upstream unreachable");
                    (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
                }
                GenerateError::UpstreamRejected(m) => {
                    error!(upstream_message = %m, "generation failed: upstream rejected the request");
                    (StatusCode::BAD_GATEWAY, e.to_string())
                }
                GenerateError::UpstreamEmptyResponse => {
                    error!("generation failed: upstream returned no choices");
                    (StatusCode::BAD_GATEWAY, e.to_string())
                }
                GenerateError::Internal(detail) => {
                    error!(detail = %detail, "generation failed: internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_owned(),
                    )
                }
            },
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
