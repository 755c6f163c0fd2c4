//! The content-generation endpoint.
//!
//! `POST /generate` runs the linear pipeline in postforge-core (validate →
//! catalog lookup → compose → upstream call → normalise), then records a
//! history entry against the caller's session.  A fresh session cookie is
//! minted when the caller does not present a valid one.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use postforge_core::{GenerateError, GenerationRequest, Length};
use tracing::info;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::history::HistoryEntry;
use crate::schemas::generate::{ArticleMetadata, GenerateRequest, GenerateResponse};
use crate::session;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(generate_content),
    components(schemas(GenerateRequest, GenerateResponse, ArticleMetadata))
)]
pub struct GenerateApi;

/// Register the generation route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/generate", post(generate_content))
}

/// Generate platform-adapted content (`POST /generate`).
#[utoipa::path(
    post,
    path = "/generate",
    tag = "generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Content generated", body = GenerateResponse),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Service not configured or internal error"),
        (status = 502, description = "Upstream rejected the request or returned nothing"),
        (status = 503, description = "Upstream unreachable"),
        (status = 504, description = "Upstream timed out"),
    )
)]
pub async fn generate_content(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, ServerError> {
    let Json(dto) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let request = into_core_request(dto)?;
    info!(
        platform = %request.platform,
        tone = %request.tone,
        length = request.length.as_str(),
        "generating content"
    );

    let article = postforge_core::generate(&state.catalog, &state.gateway, request).await?;

    // Session handling: reuse the caller's session or mint a new one so the
    // entry is retrievable via GET /history.
    let secret = &state.config.session_secret;
    let existing = session::session_id_from_headers(secret, &headers);
    let session_id = existing
        .clone()
        .unwrap_or_else(session::new_session_id);

    state.history.record(
        &session_id,
        HistoryEntry {
            timestamp: article.metadata.timestamp,
            platform: article.metadata.platform.clone(),
            tone: article.metadata.tone.clone(),
            topic: article.metadata.topic.clone(),
            length: article.metadata.length.clone(),
            tokens_used: article.metadata.tokens_used,
        },
    );

    info!(tokens_used = article.metadata.tokens_used, "content generated");

    let mut response = Json(GenerateResponse::from(article)).into_response();
    if existing.is_none() {
        if let Ok(value) = session::set_cookie_value(secret, &session_id).parse() {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    Ok(response)
}

/// Map the inbound DTO onto a core request, applying the documented
/// defaults (LinkedIn / Professional / medium).
fn into_core_request(dto: GenerateRequest) -> Result<GenerationRequest, GenerateError> {
    let topic = dto
        .topic
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| GenerateError::InvalidInput("topic is required".into()))?
        .to_owned();

    let length = match dto.length.as_deref() {
        None => Length::Medium,
        Some(s) => Length::parse(s)?,
    };

    let request = GenerationRequest {
        platform: dto.platform.unwrap_or_else(|| "LinkedIn".into()),
        tone: dto.tone.unwrap_or_else(|| "Professional".into()),
        topic,
        length,
        keywords: dto.keywords,
        style: dto.style,
    };
    request.validate()?;
    Ok(request)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    fn dto(topic: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            platform: None,
            tone: None,
            topic: topic.map(str::to_owned),
            length: None,
            keywords: None,
            style: None,
        }
    }

    #[test]
    fn missing_topic_is_invalid_input() {
        assert!(matches!(
            into_core_request(dto(None)),
            Err(GenerateError::InvalidInput(_))
        ));
    }

    #[test]
    fn defaults_are_applied() {
        let request = into_core_request(dto(Some("a topic"))).unwrap();
        assert_eq!(request.platform, "LinkedIn");
        assert_eq!(request.tone, "Professional");
        assert_eq!(request.length, Length::Medium);
    }

    #[test]
    fn unknown_length_is_rejected() {
        let mut d = dto(Some("a topic"));
        d.length = Some("enormous".into());
        assert!(matches!(
            into_core_request(d),
            Err(GenerateError::InvalidInput(_))
        ));
    }

    #[test]
    fn topic_is_trimmed() {
        let request = into_core_request(dto(Some("  spaced  "))).unwrap();
        assert_eq!(request.topic, "spaced");
    }
}
