use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use super::service::ReadingService;
use crate::db::AppState;

pub async fn ingest(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let fields = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            tracing::error!("Sensor payload is not a JSON object");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": "sensor payload must be a JSON object",
                })),
            );
        }
        Err(e) => {
            tracing::error!("Invalid sensor payload: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            );
        }
    };

    let service = ReadingService::new(state.db.clone());
    match service.ingest(fields).await {
        Ok(id) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Data received successfully",
                "id": id,
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

pub async fn latest(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = ReadingService::new(state.db.clone());
    match service.latest().await {
        Ok(Some(document)) => (StatusCode::OK, Json(document)),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No data available" })),
        ),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

pub async fn history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = ReadingService::new(state.db.clone());
    match service.history().await {
        Ok(documents) => (StatusCode::OK, Json(Value::Array(documents))),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}
