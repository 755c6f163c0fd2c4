//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `POSTFORGE_ENABLE_SWAGGER=false`)
//! - Health / stats routes
//! - Generation, template and history routes
//! - A JSON 404 fallback so every error body is structured

pub mod doc;
pub mod generate;
pub mod health;
pub mod history;
pub mod templates;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{middleware, Json, Router};
use serde_json::json;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::{cors, trace};
use crate::state::AppState;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .merge(health::router())
        .merge(generate::router())
        .merge(templates::router())
        .merge(history::router());

    let mut app = Router::new().merge(api_router);

    // ── Swagger UI ────────────────────────────────────────────────────────────
    // Enabled by default; disable with POSTFORGE_ENABLE_SWAGGER=false in
    // production to avoid exposing the API structure.
    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()));
    }

    app.fallback(not_found)
        .layer(cors::cors_layer(state.clone()))
        .layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "endpoint not found" })),
    )
}
