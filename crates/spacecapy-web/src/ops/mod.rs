//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/readyz`  : readiness (503 when draining)
//! - `/metrics` : Prometheus text format
//!
//! Also hosts the request metrics middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::obs::CONTENT_TYPE;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.metrics().is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

/// Resync the visitor mirror from storage, then render.
/// A failed resync still serves the last known value.
pub async fn metrics(State(state): State<AppState>) -> Response {
    let _ = state.visitor_counter().resync().await;
    let body = state.metrics().render();

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}

/// Count and time every request on a matched route.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let started = Instant::now();

    let resp = next.run(req).await;

    let status = resp.status().as_u16().to_string();
    let m = state.metrics();
    m.http_requests.inc(&[("route", route.as_str()), ("status", status.as_str())]);
    m.http_duration.observe(&[("route", route.as_str())], started.elapsed());
    resp
}
