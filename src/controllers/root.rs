use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::infrastructure::config::Config;

/// GET / - Service banner
pub async fn home(State(config): State<Arc<Config>>) -> Json<Value> {
    Json(json!({
        "message": "Welcome to News Digest API",
        "status": "running",
        "timestamp": Utc::now(),
        "api_keys_configured": config.api_keys_configured()
    }))
}

/// GET /test - Smoke-test route
pub async fn test() -> Json<Value> {
    Json(json!({ "message": "Test route is working!" }))
}
