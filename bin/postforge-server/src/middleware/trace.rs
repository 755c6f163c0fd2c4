use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

pub static X_TRACE_ID: &str = "x-trace-id";

/// Per-request tracing: echo or mint an `x-trace-id`, wrap the request in a
/// span carrying it, and log start / finish with latency.
pub async fn trace_middleware(req: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();

    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %method,
        path = %path,
    );

    async move {
        info!("→ request started");

        let mut req = req;
        if let Ok(value) = trace_id.to_string().parse() {
            req.headers_mut().insert(X_TRACE_ID, value);
        }

        let mut response = next.run(req).await;

        if let Ok(value) = trace_id.to_string().parse() {
            response.headers_mut().insert(X_TRACE_ID, value);
        }

        let latency = start_time.elapsed();
        info!(
            status = response.status().as_u16(),
            latency_ms = latency.as_millis(),
            "← response finished"
        );

        response
    }
    .instrument(span)
    .await
}
