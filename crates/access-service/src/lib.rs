pub mod authz;
pub mod config;
pub mod geo;
pub mod routes;
pub mod store;
pub mod visitor;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use authz::Authorizer;
use store::EventStore;

#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<dyn EventStore>,
    pub authorizer: Arc<dyn Authorizer>,
}

/// Builds the service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/ready", get(routes::ready))
        .route(
            "/access-events",
            get(routes::list_events).post(routes::record_event),
        )
        .route("/access-events/reset", post(routes::reset_events))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
