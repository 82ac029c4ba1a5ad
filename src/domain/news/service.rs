use super::{NewsArticle, NewsQuery, Preferences};
use crate::domain::shared::{DegradedReason, Upstream};
use crate::infrastructure::repositories::NewsRepository;
use std::sync::Arc;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_QUERY: &str = "technology OR science";
pub const PAGE_SIZE: u32 = 5;

/// Turns preferences into a provider query and fetches candidate articles.
///
/// Never fails: a missing provider or a failed call yields an empty,
/// degraded result.
pub struct NewsService {
    news_repo: Option<Arc<dyn NewsRepository>>,
}

impl NewsService {
    pub fn new(news_repo: Option<Arc<dyn NewsRepository>>) -> Self {
        Self { news_repo }
    }

    pub fn is_configured(&self) -> bool {
        self.news_repo.is_some()
    }

    pub fn build_query(preferences: &Preferences) -> NewsQuery {
        let topics = preferences.topics();
        let q = if topics.is_empty() {
            DEFAULT_QUERY.to_string()
        } else {
            topics.join(" OR ")
        };

        NewsQuery {
            q,
            language: preferences.language().to_string(),
            size: PAGE_SIZE,
        }
    }

    pub async fn fetch(&self, preferences: &Preferences) -> Upstream<Vec<NewsArticle>> {
        let Some(news_repo) = &self.news_repo else {
            tracing::warn!("News provider API key not configured, skipping fetch");
            return Upstream::degraded(Vec::new(), DegradedReason::NotConfigured);
        };

        let query = Self::build_query(preferences);
        let start_time = std::time::Instant::now();

        tracing::info!(
            q = %query.q,
            language = %query.language,
            size = query.size,
            "Fetching news"
        );

        match news_repo.search(&query).await {
            Ok(articles) => {
                let received = articles.len();
                let articles: Vec<NewsArticle> = articles
                    .into_iter()
                    .filter(NewsArticle::has_description)
                    .collect();

                tracing::info!(
                    received = received,
                    kept = articles.len(),
                    latency_ms = start_time.elapsed().as_millis(),
                    "News fetched"
                );

                Upstream::Fresh(articles)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    q = %query.q,
                    latency_ms = start_time.elapsed().as_millis(),
                    "Error fetching news"
                );
                Upstream::degraded(Vec::new(), DegradedReason::Unavailable(e))
            }
        }
    }
}
