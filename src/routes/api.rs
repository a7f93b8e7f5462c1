//! JSON endpoints: layout, callback dependencies, and component updates.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::callback::{CallbackError, Dependency, UpdateRequest};
use crate::layout::Layout;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UpdateResponse {
    pub output: String,
    #[serde(flatten)]
    pub payload: Value,
}

/// `GET /api/layout` — component tree with default values.
pub async fn layout(State(state): State<AppState>) -> Json<Layout> {
    Json(state.dashboard.layout().clone())
}

/// `GET /api/dependencies` — registered callbacks.
pub async fn dependencies(State(state): State<AppState>) -> Json<Vec<Dependency>> {
    Json(state.dashboard.dependencies().into_iter().cloned().collect())
}

/// `POST /api/update` — recompute one output from the page's input values.
pub async fn update(State(state): State<AppState>, Json(body): Json<UpdateRequest>) -> Response {
    match state.dashboard.dispatch(&body) {
        Ok(payload) => Json(UpdateResponse { output: body.output, payload }).into_response(),
        Err(e) => {
            warn!(error = %e, output = %body.output, "update failed");
            error_response(&e)
        }
    }
}

pub(crate) fn callback_error_to_status(err: &CallbackError) -> StatusCode {
    match err {
        CallbackError::UnknownOutput(_) => StatusCode::NOT_FOUND,
        CallbackError::MissingInput(_) | CallbackError::MalformedEndpoint(_) | CallbackError::Filter(_) => {
            StatusCode::BAD_REQUEST
        }
        CallbackError::DuplicateOutput(_) | CallbackError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &CallbackError) -> Response {
    let body = serde_json::json!({ "error": err.to_string() });
    (callback_error_to_status(err), Json(body)).into_response()
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
