use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    domain::{
        digest::{DigestResponse, DigestService, DigestServiceApi},
        news::Preferences,
    },
    error::{AppError, AppResult},
};

pub struct DigestController {
    digest_service: Arc<DigestService>,
}

impl DigestController {
    pub fn new(digest_service: Arc<DigestService>) -> Self {
        Self { digest_service }
    }

    /// POST /api/digest - Fetch and summarize articles for the given preferences
    pub async fn create_digest(
        State(controller): State<Arc<DigestController>>,
        body: Option<Json<Value>>,
    ) -> AppResult<Json<DigestResponse>> {
        let preferences = parse_preferences(body.map(|Json(value)| value))?;

        let digest = controller.digest_service.build_digest(&preferences).await?;

        Ok(Json(digest))
    }
}

/// A missing, null or empty body means no preferences were sent
fn parse_preferences(body: Option<Value>) -> AppResult<Preferences> {
    match body {
        Some(Value::Object(map)) if !map.is_empty() => {
            serde_json::from_value(Value::Object(map))
                .map_err(|e| AppError::BadRequest(format!("Invalid preferences: {}", e)))
        }
        _ => Err(AppError::BadRequest("No preferences provided".to_string())),
    }
}
