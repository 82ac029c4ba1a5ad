use crate::error::AppError;

pub const NO_ARTICLES_MESSAGE: &str = "No articles found for the given preferences";
pub const NO_ARTICLES_DEGRADED_MESSAGE: &str = "No articles found. Please check your API keys.";

#[derive(Debug, thiserror::Error)]
pub enum DigestServiceError {
    /// `degraded` is set when the provider was missing or failed
    #[error("no articles found")]
    NoArticles { degraded: bool },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DigestServiceError> for AppError {
    fn from(err: DigestServiceError) -> Self {
        match err {
            DigestServiceError::NoArticles { degraded: false } => {
                AppError::NotFound(NO_ARTICLES_MESSAGE.to_string())
            }
            DigestServiceError::NoArticles { degraded: true } => {
                AppError::NotFound(NO_ARTICLES_DEGRADED_MESSAGE.to_string())
            }
            DigestServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
