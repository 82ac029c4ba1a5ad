pub mod error;
pub mod service;

pub use error::DigestServiceError;
pub use service::{DigestService, DigestServiceApi, MAX_DIGEST_ITEMS};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One summarized article in a digest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestItem {
    pub title: String,
    pub summary: String,
    pub source: String,
    pub published_date: String,
    pub url: String,
    pub image_url: String,
}

/// Response for POST /api/digest
#[derive(Debug, Serialize, Deserialize)]
pub struct DigestResponse {
    pub articles: Vec<DigestItem>,
    pub timestamp: DateTime<Utc>,
}
