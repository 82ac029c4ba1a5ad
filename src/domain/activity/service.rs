use super::error::ActivityServiceError;
use super::{ActivityRequest, NewActivity, RecordedActivity};
use crate::infrastructure::repositories::ActivityRepository;
use std::sync::Arc;

pub const UNKNOWN_TITLE: &str = "Unknown";

pub struct ActivityService {
    activity_repo: Arc<ActivityRepository>,
}

impl ActivityService {
    pub fn new(activity_repo: Arc<ActivityRepository>) -> Self {
        Self { activity_repo }
    }

    pub async fn record(
        &self,
        request: ActivityRequest,
    ) -> Result<RecordedActivity, ActivityServiceError> {
        let activity = Self::validate(request)?;

        let recorded = self.activity_repo.record(&activity).await?;

        tracing::info!(
            activity_id = %recorded.activity.id,
            user_id = %activity.user_id,
            article_id = %recorded.article.id,
            article_created = recorded.article_created,
            time_spent = activity.time_spent,
            liked = ?activity.liked,
            clicked_full_article = activity.clicked_full_article,
            "Activity recorded"
        );

        Ok(recorded)
    }

    /// Check required fields and fill defaults for the optional ones
    pub fn validate(request: ActivityRequest) -> Result<NewActivity, ActivityServiceError> {
        let article_url = request
            .article_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        let (Some(user_id), Some(article_url)) = (request.user_id, article_url) else {
            return Err(ActivityServiceError::Invalid(
                "user_id and article_url are required".to_string(),
            ));
        };

        let time_spent = request.time_spent.unwrap_or(0.0);
        if !time_spent.is_finite() || time_spent < 0.0 {
            return Err(ActivityServiceError::Invalid(
                "time_spent must be a non-negative number of seconds".to_string(),
            ));
        }

        let article_title = request
            .article_title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        Ok(NewActivity {
            user_id,
            article_url,
            article_title,
            time_spent,
            liked: request.liked,
            clicked_full_article: request.clicked_full_article.unwrap_or(false),
        })
    }
}
