use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use super::registry::{
    HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS, REQUEST_DURATION_SECONDS,
};

/// Metrics middleware for tracking HTTP requests.
///
/// Routes are labeled by their matched pattern, not the raw path; all
/// staking routes are fixed paths so the two coincide.
pub async fn metrics_middleware(
    matched_path: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    // Skip the metrics endpoint itself
    let path = req.uri().path();
    if path == "/metrics" {
        return next.run(req).await;
    }

    let method = req.method().to_string();
    let route = matched_path
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| path.to_string());

    let started = Instant::now();
    HTTP_REQUESTS.inc();

    let response = next.run(req).await;

    let status = response.status();
    if status.is_success() {
        HTTP_REQUEST_SUCCESS.inc();
    } else {
        HTTP_REQUEST_ERROR.inc();
    }

    REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &route, status.as_str()])
        .observe(started.elapsed().as_secs_f64());

    response
}
