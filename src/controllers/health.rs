use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;
use crate::infrastructure::db::{check_connection, DbPool};

fn configured(flag: bool) -> &'static str {
    if flag {
        "configured"
    } else {
        "not_configured"
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(
    State((pool, config)): State<(Arc<DbPool>, Arc<Config>)>,
) -> impl IntoResponse {
    let news_provider = configured(config.newsdata_configured());
    let summarizer = configured(config.gemini_configured());

    match check_connection(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "database": "connected",
                "news_provider": news_provider,
                "summarizer": summarizer
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "database": "disconnected",
                "news_provider": news_provider,
                "summarizer": summarizer
            })),
        ),
    }
}
