pub mod error;
pub mod model;
pub mod service;

pub use error::ActivityServiceError;
pub use model::{Activity, Article, NewActivity, RecordedActivity};
pub use service::{ActivityService, UNKNOWN_TITLE};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for POST /api/activity
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ActivityRequest {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub article_url: Option<String>,
    #[serde(default)]
    pub article_title: Option<String>,
    #[serde(default)]
    pub time_spent: Option<f64>,
    #[serde(default)]
    pub liked: Option<bool>,
    #[serde(default)]
    pub clicked_full_article: Option<bool>,
}
