//! Route bookkeeping for the root endpoint.
//!
//! Every route added through [`RegisterRoute::route_registered`] is recorded
//! with its method, so `GET /` can list the full surface without a second
//! hand-maintained table.

use axum::{Router, routing::MethodRouter};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// A registered route: full path plus HTTP method.
#[derive(Clone, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub method: String,
}

/// Shared list of registered routes.
#[derive(Clone, Default)]
pub struct RouteRegistry(Arc<RwLock<Vec<RouteInfo>>>);

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, path: &str, method: &str) {
        if let Ok(mut routes) = self.0.write() {
            routes.push(RouteInfo {
                path: path.to_string(),
                method: method.to_string(),
            });
        }
    }

    pub fn routes(&self) -> Vec<RouteInfo> {
        self.0.read().map(|r| r.clone()).unwrap_or_default()
    }
}

/// Adds a route to the router and records it in the registry in one step.
/// Paths are full paths; the staking routes are merged, not nested, so the
/// routed path and the recorded path coincide.
pub trait RegisterRoute<S: Clone + Send + Sync + 'static> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RegisterRoute<S> for Router<S> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self {
        registry.add(path, method);
        self.route(path, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_records_routes_in_order() {
        let registry = RouteRegistry::new();
        registry.add("/parachain/staking/atStake", "post");
        registry.add("/health", "get");

        let routes = registry.routes();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path, "/parachain/staking/atStake");
        assert_eq!(routes[0].method, "post");
        assert_eq!(routes[1].path, "/health");
    }
}
