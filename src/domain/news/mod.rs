pub mod model;
pub mod service;

pub use model::{NewsArticle, NewsQuery};
pub use service::{NewsService, DEFAULT_LANGUAGE, DEFAULT_QUERY, PAGE_SIZE};

use serde::{Deserialize, Serialize};

/// Topic and language preferences sent by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

impl Preferences {
    /// Requested language, `en` when absent or blank
    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Non-blank topics in the order they were sent
    pub fn topics(&self) -> Vec<&str> {
        self.topics
            .iter()
            .flatten()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect()
    }
}
