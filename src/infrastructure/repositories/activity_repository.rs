use super::article_repository::get_or_create_article;
use crate::infrastructure::db::DbPool;
use crate::{
    domain::activity::{Activity, NewActivity, RecordedActivity},
    error::{AppError, AppResult},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct ActivityRepository {
    pool: Arc<DbPool>,
}

impl ActivityRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Append one activity row, creating the referenced article on first
    /// sight of its URL. Both writes share a transaction.
    pub async fn record(&self, activity: &NewActivity) -> AppResult<RecordedActivity> {
        let mut tx = self.pool.begin().await?;

        let (article, article_created) =
            get_or_create_article(&mut tx, &activity.article_url, &activity.article_title).await?;

        let stored = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO user_activities (id, user_id, article_id, time_spent, liked, clicked_full_article, timestamp)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, article_id, time_spent, liked, clicked_full_article, timestamp
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(activity.user_id)
        .bind(article.id)
        .bind(activity.time_spent)
        .bind(activity.liked)
        .bind(activity.clicked_full_article)
        .bind(chrono::Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_foreign_key_violation() {
                    return AppError::NotFound("User not found".to_string());
                }
            }
            AppError::Database(e)
        })?;

        tx.commit().await?;

        Ok(RecordedActivity {
            activity: stored,
            article,
            article_created,
        })
    }
}
