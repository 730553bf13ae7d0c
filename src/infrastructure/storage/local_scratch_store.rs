use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{ScratchStore, ScratchStoreError};
use crate::domain::ArtifactName;

/// Scratch store backed by a single local directory.
pub struct LocalScratchStore {
    root: PathBuf,
}

impl LocalScratchStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ScratchStoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| ScratchStoreError::WriteFailed(format!("create {:?}: {}", root, e)))?;
        Ok(Self { root })
    }
}

#[async_trait]
impl ScratchStore for LocalScratchStore {
    async fn put(&self, name: &ArtifactName, data: Bytes) -> Result<(), ScratchStoreError> {
        let path = self.absolute_path(name);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(format!("{:?}: {}", path, e)))?;
        tracing::debug!(artifact = %name, bytes = data.len(), "Stored artifact");
        Ok(())
    }

    async fn fetch(&self, name: &ArtifactName) -> Result<Vec<u8>, ScratchStoreError> {
        let path = self.absolute_path(name);
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ScratchStoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(ScratchStoreError::ReadFailed(format!("{:?}: {}", path, e))),
        }
    }

    fn absolute_path(&self, name: &ArtifactName) -> PathBuf {
        self.root.join(name.as_str())
    }
}
