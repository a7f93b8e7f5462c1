//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One HTML page at `/` plus the JSON endpoints its script talks to. The page
//! posts the current control values to `/api/update` on every change and
//! swaps the returned chart into place without reloading.

pub mod api;
pub mod page;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/layout", get(api::layout))
        .route("/api/dependencies", get(api::dependencies))
        .route("/api/update", post(api::update))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
