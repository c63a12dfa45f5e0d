use std::path::Path;

use async_trait::async_trait;

/// Converts an uncompressed audio file to a compressed target format via an
/// external codec tool. `is_available` lets callers skip the tier without
/// triggering an error when the tool is absent from the host.
#[async_trait]
pub trait Transcoder: Send + Sync {
    fn is_available(&self) -> bool;

    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("codec tool not found")]
    ToolNotFound,
    #[error("transcode failed: {0}")]
    Failed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
