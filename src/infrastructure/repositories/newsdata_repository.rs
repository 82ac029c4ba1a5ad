use super::news_repository::NewsRepository;
use crate::domain::news::{NewsArticle, NewsQuery};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct NewsDataResponse {
    status: String,
    /// A list of articles on success, an error object otherwise
    #[serde(default)]
    results: Value,
}

#[derive(Debug, Deserialize)]
struct NewsDataArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    source_id: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    link: Option<String>,
    image_url: Option<String>,
}

impl From<NewsDataArticle> for NewsArticle {
    fn from(article: NewsDataArticle) -> Self {
        Self {
            title: article
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Untitled".to_string()),
            description: article.description,
            content: article.content,
            source_id: article.source_id,
            pub_date: article.pub_date,
            link: article.link,
            image_url: article.image_url,
        }
    }
}

/// NewsData.io implementation of the news repository
pub struct NewsDataRepository {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsDataRepository {
    pub fn new(http_client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn parse_body(body: NewsDataResponse) -> Result<Vec<NewsArticle>, String> {
        if body.status != "success" {
            let message = body
                .results
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error");
            return Err(format!(
                "News provider returned status '{}': {}",
                body.status, message
            ));
        }

        if body.results.is_null() {
            return Ok(Vec::new());
        }

        let articles: Vec<NewsDataArticle> = serde_json::from_value(body.results)
            .map_err(|e| format!("Failed to parse news provider results: {}", e))?;

        Ok(articles.into_iter().map(NewsArticle::from).collect())
    }
}

#[async_trait]
impl NewsRepository for NewsDataRepository {
    async fn search(&self, query: &NewsQuery) -> Result<Vec<NewsArticle>, String> {
        let url = format!("{}/news", self.base_url);
        let size = query.size.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("language", query.language.as_str()),
                ("size", size.as_str()),
                ("q", query.q.as_str()),
            ])
            .send()
            .await
            .map_err(|e| format!("News provider request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!(
                "News provider returned HTTP {}: {}",
                status.as_u16(),
                error_text
            ));
        }

        let body = response
            .json::<NewsDataResponse>()
            .await
            .map_err(|e| format!("Failed to parse news provider response: {}", e))?;

        tracing::debug!(provider_status = %body.status, "News provider responded");

        Self::parse_body(body)
    }
}
