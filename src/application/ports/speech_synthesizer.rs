use async_trait::async_trait;

use crate::domain::{AudioFormat, VoiceParams};

/// A remote text-to-speech provider returning encoded audio bytes.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn id(&self) -> &str;

    /// Format the provider encodes to when the request succeeds.
    fn output_format(&self, params: &VoiceParams) -> AudioFormat;

    async fn synthesize(&self, text: &str, params: &VoiceParams) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("empty audio payload")]
    EmptyPayload,
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}
