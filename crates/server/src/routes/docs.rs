use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::{openapi::ApiDoc, state::AppState};

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
