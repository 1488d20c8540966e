use axum::{Router, middleware::from_fn, routing::get};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{
    consts::MAX_BODY_SIZE,
    metrics::metrics_middleware,
    routes,
    state::AppState,
};

pub fn create_app(state: AppState) -> Router {
    crate::metrics::init("staking_api");

    let registry = state.route_registry.clone();

    Router::new()
        .route("/", get(routes::root::root_handler))
        .merge(routes::health::routes(&registry))
        .merge(routes::version::routes(&registry))
        .merge(routes::metrics::routes())
        .merge(routes::docs::routes())
        .merge(routes::staking::routes(&registry, state.response_cache.clone()))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .with_state(state)
}
