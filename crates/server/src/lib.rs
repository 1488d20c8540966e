pub mod app;
pub mod consts;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod state;
pub mod types;
