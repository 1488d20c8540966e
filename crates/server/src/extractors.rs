//! Custom Axum extractors that return JSON error responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, Query, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

/// A wrapper around [`Query<T>`] that returns JSON error responses on rejection.
///
/// Axum's default `Query<T>` returns plain-text errors when deserialization fails
/// (e.g., unknown fields with `deny_unknown_fields`). This extractor converts
/// those rejections to `{"error": "..."}` JSON with 400 Bad Request status.
pub struct JsonQuery<T>(pub T);

impl<T, S> axum::extract::FromRequestParts<S> for JsonQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            match Query::<T>::from_request_parts(parts, state).await {
                Ok(Query(value)) => Ok(JsonQuery(value)),
                Err(rejection) => Err(json_query_error(rejection)),
            }
        })
    }
}

fn json_query_error(rejection: QueryRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": rejection.body_text() })),
    )
        .into_response()
}

/// A wrapper around [`Json<T>`] for request bodies that returns JSON error
/// responses with 400 Bad Request on rejection.
///
/// Axum's default `Json<T>` rejects malformed or incomplete bodies with 422
/// and a plain-text message; the staking routes answer every client error as
/// `{"error": "..."}` JSON with 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    fn from_request<'life0, 'async_trait>(
        req: Request,
        state: &'life0 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => Err(json_body_error(rejection)),
            }
        })
    }
}

fn json_body_error(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": rejection.body_text() })),
    )
        .into_response()
}
