use super::{AppState, EXECUTE_COMPLETED_BODY, EXECUTE_FAILED_BODY, UNAUTHORIZED_BODY};
use crate::activity::ExecutionOutcome;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

/// GET /health
pub(super) async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// POST /execute -- body is the signed claims token
pub(super) async fn handle_execute(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    match state.handler.execute(&body).await {
        ExecutionOutcome::Completed { .. } => (StatusCode::OK, EXECUTE_COMPLETED_BODY),
        ExecutionOutcome::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY),
        ExecutionOutcome::Failed { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, EXECUTE_FAILED_BODY)
        }
    }
}

fn acknowledge(hook: &'static str) -> Json<serde_json::Value> {
    tracing::info!(hook, "lifecycle callback acknowledged");
    Json(json!({"success": true}))
}

/// POST /save
pub(super) async fn handle_save() -> impl IntoResponse {
    acknowledge("save")
}

/// POST /publish
pub(super) async fn handle_publish() -> impl IntoResponse {
    acknowledge("publish")
}

/// POST /validate
pub(super) async fn handle_validate() -> impl IntoResponse {
    acknowledge("validate")
}
