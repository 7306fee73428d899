use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    database: String,
}

#[derive(Serialize)]
struct VersionResponse {
    version: String,
}

async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    // Probe the store; an unreachable backend makes the service unhealthy
    // but the endpoint itself still answers 200 with the detail
    let response = match state.store.ping().await {
        Ok(()) => HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
        },
        Err(err) => {
            tracing::error!("Health check failed: {}", err);
            HealthResponse {
                status: "unhealthy".to_string(),
                database: "disconnected".to_string(),
            }
        }
    };

    Json(response)
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
