use serde::{Deserialize, Serialize};

/// Candidate article as returned by the news provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub source_id: Option<String>,
    pub pub_date: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

impl NewsArticle {
    /// An article is usable for a digest only if it carries a non-empty description
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| !d.is_empty())
            .unwrap_or(false)
    }
}

/// Provider query derived from user preferences
#[derive(Debug, Clone, PartialEq)]
pub struct NewsQuery {
    pub q: String,
    pub language: String,
    pub size: u32,
}
