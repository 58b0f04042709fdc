//! Request counter exposed at `/metrics` in Prometheus text format.

use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, IntCounterVec, TextEncoder};

static HTTP_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "http_requests_total",
        "HTTP requests processed, labeled by method, route and status",
        &["method", "path", "status"]
    )
    .expect("register http_requests_total")
});

/// Middleware counting every request by matched route (not raw URI, to keep
/// label cardinality bounded).
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    HTTP_REQUESTS
        .with_label_values(&[&method, &path, response.status().as_str()])
        .inc();
    response
}

pub async fn metrics() -> (StatusCode, String) {
    let families = prometheus::gather();
    match TextEncoder::new().encode_to_string(&families) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
