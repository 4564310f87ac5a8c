use axum::{extract::State, Json};
use shared::StatusResponse;
use std::sync::Arc;

use crate::AppState;

/// `GET /`. The message is fixed when the router is built.
pub async fn root(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse::ok(state.running_message.clone()))
}
