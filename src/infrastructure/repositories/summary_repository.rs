use crate::domain::summary::GenerationConfig;
use async_trait::async_trait;

/// Repository for text generation.
/// Abstracts the underlying generative model provider.
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// Generate text for `prompt` using the given sampling configuration.
    ///
    /// Returns the raw generated text, which may be empty.
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String, String>;
}
