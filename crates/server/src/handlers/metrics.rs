use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::metrics::gather_metrics;

/// Handler for GET /metrics
pub async fn get_metrics() -> Response {
    match gather_metrics() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Failed to gather metrics: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to gather metrics").into_response()
        }
    }
}
