use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::command::handler as command;
use crate::db::AppState;
use crate::reading::handler as reading;

pub fn create_router(db: SqlitePool) -> Router {
    let state = Arc::new(AppState { db });

    Router::new()
        // Dashboard
        .route("/", get(index))
        // Device routes
        .route("/api/sensor-data", post(reading::ingest))
        .route("/api/commands", get(command::poll))
        // Dashboard routes
        .route("/api/motor-control", post(command::create))
        .route("/api/latest-data", get(reading::latest))
        .route("/api/historical-data", get(reading::history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../public/index.html"))
}
