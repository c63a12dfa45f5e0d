use std::path::PathBuf;
use std::sync::Arc;

use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ArtifactStore, ArtifactStoreError};

/// Filesystem-backed artifact store rooted at a configured directory.
pub struct LocalArtifactStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalArtifactStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| ArtifactStoreError::WriteFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ArtifactStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn put(&self, path: &str, bytes: Vec<u8>) -> Result<(), ArtifactStoreError> {
        let store_path = StorePath::from(path);
        self.inner
            .put(&store_path, PutPayload::from(bytes))
            .await
            .map_err(|e| ArtifactStoreError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ArtifactStoreError> {
        let store_path = StorePath::from(path);
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| ArtifactStoreError::NotFound(e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| ArtifactStoreError::ReadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ArtifactStore;

    #[tokio::test]
    async fn given_stored_bytes_when_fetched_then_same_bytes_come_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::new(dir.path().to_path_buf()).unwrap();

        store
            .put("audio/test.mp3", vec![1, 2, 3, 4])
            .await
            .unwrap();
        let fetched = store.fetch("audio/test.mp3").await.unwrap();
        assert_eq!(fetched, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn given_missing_path_when_fetched_then_not_found_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalArtifactStore::new(dir.path().to_path_buf()).unwrap();

        let err = store.fetch("audio/absent.mp3").await.unwrap_err();
        assert!(matches!(err, ArtifactStoreError::NotFound(_)));
    }
}
