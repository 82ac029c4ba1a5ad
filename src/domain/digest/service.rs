use super::error::DigestServiceError;
use super::{DigestItem, DigestResponse};
use crate::domain::news::{NewsArticle, NewsService, Preferences};
use crate::domain::summary::SummaryService;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub const MAX_DIGEST_ITEMS: usize = 3;

pub struct DigestService {
    news_service: Arc<NewsService>,
    summary_service: Arc<SummaryService>,
}

impl DigestService {
    pub fn new(news_service: Arc<NewsService>, summary_service: Arc<SummaryService>) -> Self {
        Self {
            news_service,
            summary_service,
        }
    }
}

#[async_trait]
pub trait DigestServiceApi: Send + Sync {
    /// Build a digest for the given preferences.
    ///
    /// Fetches candidate articles, keeps the first `MAX_DIGEST_ITEMS` and
    /// summarizes each one in turn. Fails with `NoArticles` when the
    /// fetch yields nothing.
    async fn build_digest(
        &self,
        preferences: &Preferences,
    ) -> Result<DigestResponse, DigestServiceError>;
}

#[async_trait]
impl DigestServiceApi for DigestService {
    async fn build_digest(
        &self,
        preferences: &Preferences,
    ) -> Result<DigestResponse, DigestServiceError> {
        let language = preferences.language();
        let fetched = self.news_service.fetch(preferences).await;

        if fetched.value().is_empty() {
            tracing::info!(
                degraded = fetched.is_degraded(),
                reason = ?fetched.reason(),
                "No articles for digest"
            );
            return Err(DigestServiceError::NoArticles {
                degraded: fetched.is_degraded(),
            });
        }

        let mut articles = Vec::with_capacity(MAX_DIGEST_ITEMS);
        let mut degraded_summaries = 0;

        for article in fetched.into_value().into_iter().take(MAX_DIGEST_ITEMS) {
            let summary = self.summary_service.summarize(&article, language).await;
            if summary.is_degraded() {
                degraded_summaries += 1;
            }
            articles.push(Self::to_item(article, summary.into_value()));
        }

        tracing::info!(
            items = articles.len(),
            degraded_summaries = degraded_summaries,
            language = language,
            "Digest assembled"
        );

        Ok(DigestResponse {
            articles,
            timestamp: Utc::now(),
        })
    }
}

impl DigestService {
    fn to_item(article: NewsArticle, summary: String) -> DigestItem {
        DigestItem {
            title: article.title,
            summary,
            source: article.source_id.unwrap_or_else(|| "Unknown".to_string()),
            published_date: article.pub_date.unwrap_or_default(),
            url: article.link.unwrap_or_default(),
            image_url: article.image_url.unwrap_or_default(),
        }
    }
}
