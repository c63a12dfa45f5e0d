use std::path::Path;

use async_trait::async_trait;

/// An on-machine speech engine that renders plain text to an uncompressed
/// audio file at the given path. No network dependency.
#[async_trait]
pub trait LocalSpeechEngine: Send + Sync {
    async fn render(&self, text: &str, output: &Path) -> Result<(), EngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("speech engine not available: {0}")]
    NotAvailable(String),
    #[error("speech engine failed: {0}")]
    RenderFailed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
