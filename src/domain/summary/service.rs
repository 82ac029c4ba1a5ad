use super::GenerationConfig;
use crate::domain::news::NewsArticle;
use crate::domain::shared::{DegradedReason, Upstream};
use crate::infrastructure::repositories::SummaryRepository;
use html2text::from_read;
use moka::future::Cache;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

/// Placeholder the news provider puts in `content` on free plans
static PAID_PLAN_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)only available in (paid|professional and corporate) plans").unwrap()
});
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub const FALLBACK_SUMMARY: &str = "No summary available.";
pub const NOT_CONFIGURED_SUMMARY: &str = "No summary available (AI summarization not available).";

pub struct SummaryService {
    summary_repo: Option<Arc<dyn SummaryRepository>>,
    generation_config: GenerationConfig,
    cache: Option<Cache<String, String>>,
}

impl SummaryService {
    pub fn new(summary_repo: Option<Arc<dyn SummaryRepository>>, cache_enabled: bool) -> Self {
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(500)
                    .time_to_idle(Duration::from_secs(30 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            summary_repo,
            generation_config: GenerationConfig::default(),
            cache,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.summary_repo.is_some()
    }

    /// Summarize one article in the requested language.
    ///
    /// Never fails. Empty responses and provider errors resolve to
    /// `FALLBACK_SUMMARY`, a missing provider to `NOT_CONFIGURED_SUMMARY`.
    pub async fn summarize(&self, article: &NewsArticle, language: &str) -> Upstream<String> {
        let Some(summary_repo) = &self.summary_repo else {
            return Upstream::degraded(
                NOT_CONFIGURED_SUMMARY.to_string(),
                DegradedReason::NotConfigured,
            );
        };

        let cache_key = Self::cache_key(article, language);
        if let Some(cache) = &self.cache {
            if let Some(summary) = cache.get(&cache_key).await {
                tracing::debug!(key = %cache_key, "Summary cache hit");
                return Upstream::Fresh(summary);
            }
        }

        let prompt = Self::build_prompt(article, language);
        let start_time = std::time::Instant::now();

        let summary = match summary_repo.generate(&prompt, &self.generation_config).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                tracing::warn!(title = %article.title, "Empty response from summarizer");
                return Upstream::degraded(
                    FALLBACK_SUMMARY.to_string(),
                    DegradedReason::Unavailable("empty response".to_string()),
                );
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    title = %article.title,
                    latency_ms = start_time.elapsed().as_millis(),
                    "Error summarizing article"
                );
                return Upstream::degraded(
                    FALLBACK_SUMMARY.to_string(),
                    DegradedReason::Unavailable(e),
                );
            }
        };

        tracing::info!(
            title = %article.title,
            language = language,
            summary_length = summary.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Article summarized"
        );

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, summary.clone()).await;
        }

        Upstream::Fresh(summary)
    }

    pub fn build_prompt(article: &NewsArticle, language: &str) -> String {
        let mut content = clean_text(article.description.as_deref().unwrap_or_default());
        if let Some(extra) = article.content.as_deref().map(clean_text) {
            if !extra.is_empty() {
                content.push('\n');
                content.push_str(&extra);
            }
        }

        format!(
            "Please provide a detailed, informative summary of this news article in 5-6 lines \
             as if you are explaining it to a 5 year old.\n\n\
             Title: {}\nContent: {}\n\n\
             Focus on the main points, background, and key information. Respond in {}.",
            article.title, content, language
        )
    }

    fn cache_key(article: &NewsArticle, language: &str) -> String {
        let identity = article.link.as_deref().unwrap_or(&article.title);
        format!("{}:{}", language, identity)
    }
}

/// Strip markup and collapse whitespace
fn clean_text(text: &str) -> String {
    let text = if text.contains('<') {
        from_read(text.as_bytes(), usize::MAX)
    } else {
        text.to_string()
    };
    let text = PAID_PLAN_MARKER.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
