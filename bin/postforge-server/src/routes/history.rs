//! Session-scoped generation history.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::history::HistoryEntry;
use crate::session;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_history), components(schemas(HistoryEntry)))]
pub struct HistoryApi;

/// Register history routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/history", get(get_history))
}

/// The caller's 10 most recent generations (`GET /history`).
///
/// A caller without a valid session cookie gets an empty list.
#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "Session history", body = Value)
    )
)]
pub async fn get_history(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Json<Value> {
    let entries = session::session_id_from_headers(&state.config.session_secret, &headers)
        .map(|sid| state.history.list(&sid))
        .unwrap_or_default();
    Json(json!({ "history": entries }))
}
