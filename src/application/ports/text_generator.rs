use async_trait::async_trait;

/// A remote text-generation provider.
///
/// Implementations signal failure exclusively through the error variant so
/// the fallback orchestrator can treat "provider unavailable" uniformly.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Stable identifier recorded in `ContentSource::Provider`.
    fn id(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, TextGeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextGeneratorError {
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}
