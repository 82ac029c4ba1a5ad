use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// One engagement event. Rows are append-only history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub article_id: Uuid,
    pub time_spent: f64,
    /// `None` means the article was not rated
    pub liked: Option<bool>,
    pub clicked_full_article: bool,
    pub timestamp: DateTime<Utc>,
}

/// Validated input for recording an activity
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub user_id: Uuid,
    pub article_url: String,
    pub article_title: String,
    pub time_spent: f64,
    pub liked: Option<bool>,
    pub clicked_full_article: bool,
}

#[derive(Debug, Clone)]
pub struct RecordedActivity {
    pub activity: Activity,
    pub article: Article,
    pub article_created: bool,
}
