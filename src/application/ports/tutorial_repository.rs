use async_trait::async_trait;

use crate::domain::{Tutorial, TutorialId};

/// Persistence for generated tutorials. The generation pipeline never touches
/// this directly; the web layer saves results after the pipeline returns.
#[async_trait]
pub trait TutorialRepository: Send + Sync {
    async fn save(&self, tutorial: &Tutorial) -> Result<(), RepositoryError>;

    async fn get(&self, id: TutorialId) -> Result<Option<Tutorial>, RepositoryError>;

    async fn list_recent(&self, limit: u32) -> Result<Vec<Tutorial>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
}
