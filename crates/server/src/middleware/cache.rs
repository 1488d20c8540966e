//! Short-lived response cache for the analytic routes.
//!
//! The reward/history routes are expensive for the backing services and
//! their answers only move once per block, so they are cached for
//! [`ROUTE_CACHE_TTL`]. The key covers method, URI and request body; only
//! successful JSON responses are stored. Applied per route, not globally.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;

use crate::consts::ROUTE_CACHE_TTL;

#[derive(Clone)]
struct CacheEntry {
    status: StatusCode,
    content_type: Option<HeaderValue>,
    body: Bytes,
    stored_at: Instant,
}

/// Thread-safe in-memory response store.
#[derive(Clone, Default)]
pub struct ResponseCache(Arc<Mutex<HashMap<u64, CacheEntry>>>);

impl ResponseCache {
    /// Look up a cached response, pruning it when older than `ttl`.
    fn get(&self, key: u64, ttl: Duration) -> Option<CacheEntry> {
        let mut entries = self.0.lock().ok()?;
        match entries.get(&key) {
            Some(entry) if entry.stored_at.elapsed() < ttl => Some(entry.clone()),
            Some(_) => {
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    fn insert(&self, key: u64, entry: CacheEntry, ttl: Duration) {
        if let Ok(mut entries) = self.0.lock() {
            // Opportunistic sweep keeps the map from accumulating stale
            // entries between hits on distinct keys.
            entries.retain(|_, e| e.stored_at.elapsed() < ttl);
            entries.insert(key, entry);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.lock().map(|e| e.len()).unwrap_or(0)
    }
}

fn cache_key(method: &axum::http::Method, uri: &axum::http::Uri, body: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    method.as_str().hash(&mut hasher);
    uri.to_string().hash(&mut hasher);
    body.hash(&mut hasher);
    hasher.finish()
}

fn entry_to_response(entry: CacheEntry) -> Response {
    let mut response = Response::new(Body::from(entry.body));
    *response.status_mut() = entry.status;
    if let Some(content_type) = entry.content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    response
}

/// Replays a stored response for repeated requests within the TTL; otherwise
/// runs the handler and stores successful JSON answers.
pub async fn cache_middleware(
    State(cache): State<ResponseCache>,
    req: Request,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();

    let body_bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                axum::Json(serde_json::json!({ "error": "failed to read request body" })),
            )
                .into_response();
        }
    };

    let key = cache_key(&parts.method, &parts.uri, &body_bytes);

    if let Some(entry) = cache.get(key, ROUTE_CACHE_TTL) {
        return entry_to_response(entry);
    }

    let req = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(req).await;

    if response.status() != StatusCode::OK {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        return response;
    }

    let (resp_parts, resp_body) = response.into_parts();
    let resp_bytes = match resp_body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Response::from_parts(resp_parts, Body::empty()),
    };

    cache.insert(
        key,
        CacheEntry {
            status: resp_parts.status,
            content_type: resp_parts.headers.get(header::CONTENT_TYPE).cloned(),
            body: resp_bytes.clone(),
            stored_at: Instant::now(),
        },
        ROUTE_CACHE_TTL,
    );

    Response::from_parts(resp_parts, Body::from(resp_bytes))
}
