use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use super::model::{MotorControlRequest, WEB_INTERFACE};
use super::service::CommandService;
use crate::db::AppState;

pub async fn create(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let request: MotorControlRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Invalid motor control request: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            );
        }
    };

    let service = CommandService::new(state.db.clone());
    match service.enqueue(&request.command, WEB_INTERFACE).await {
        Ok(command) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": format!(
                    "Motor command \"{}\" sent successfully",
                    command.motor_command
                ),
            })),
        ),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
        }
    }
}

pub async fn poll(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = CommandService::new(state.db.clone());
    match service.dequeue().await {
        Ok(Some(command)) => (
            StatusCode::OK,
            Json(json!({
                "motor_command": command.motor_command,
                "timestamp": command.timestamp,
            })),
        ),
        // Drained queue is an expected outcome, not an error
        Ok(None) => (StatusCode::OK, Json(json!({}))),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}
