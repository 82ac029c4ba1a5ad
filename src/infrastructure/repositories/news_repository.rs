use crate::domain::news::{NewsArticle, NewsQuery};
use async_trait::async_trait;

/// Repository for searching a third-party news provider.
///
/// Implementations translate a `NewsQuery` into the provider's request
/// format and map its results into `NewsArticle`s. Any transport failure,
/// non-success status, or provider-reported error is returned as `Err`;
/// the caller decides how to degrade.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn search(&self, query: &NewsQuery) -> Result<Vec<NewsArticle>, String>;
}
