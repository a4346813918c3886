//! Axum router wiring.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, ops, page};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route_layer(middleware::from_fn_with_state(state.clone(), ops::track_requests))
        .with_state(state)
}
