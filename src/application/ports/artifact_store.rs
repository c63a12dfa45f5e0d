use async_trait::async_trait;

/// Byte storage for generated audio files, keyed by relative path.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn put(&self, path: &str, bytes: Vec<u8>) -> Result<(), ArtifactStoreError>;

    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
}
