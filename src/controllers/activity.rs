use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        activity::{ActivityRequest, ActivityService},
        shared::MessageResponse,
    },
    error::{AppError, AppResult},
};

pub struct ActivityController {
    activity_service: Arc<ActivityService>,
}

impl ActivityController {
    pub fn new(activity_service: Arc<ActivityService>) -> Self {
        Self { activity_service }
    }

    /// POST /api/activity - Record one engagement event
    pub async fn record(
        State(controller): State<Arc<ActivityController>>,
        body: Result<Json<ActivityRequest>, JsonRejection>,
    ) -> AppResult<Json<MessageResponse>> {
        let Json(request) = body.map_err(rejection_error)?;

        controller.activity_service.record(request).await?;

        Ok(Json(MessageResponse::new("Activity recorded")))
    }
}

/// A body that parses but carries a wrongly typed field is reported as such.
/// A missing or unparseable body means the required fields were not sent.
fn rejection_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            AppError::BadRequest(format!("Invalid activity: {}", e.body_text()))
        }
        _ => AppError::BadRequest("user_id and article_url are required".to_string()),
    }
}
