//! Health and stats endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health, get_stats))]
pub struct HealthApi;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/stats", get(get_stats))
}

/// Heartbeat endpoint.
///
/// Reports whether the upstream API key is configured and which model is in
/// use.  Load-balancers and monitoring systems should poll this endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = Value)
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "api_configured": state.gateway.api_configured(),
        "model": state.gateway.model(),
    }))
}

/// Service capability listing: supported platforms and tones.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "health",
    responses(
        (status = 200, description = "Service statistics", body = Value)
    )
)]
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "supported_platforms": state.catalog.platform_names(),
        "supported_tones": state.catalog.tone_names(),
        "model": state.gateway.model(),
        "api_configured": state.gateway.api_configured(),
    }))
}
