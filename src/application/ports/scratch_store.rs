use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::domain::ArtifactName;

#[derive(Debug, Error)]
pub enum ScratchStoreError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
}

/// Flat per-process scratch space for recordings, images and replies.
#[async_trait]
pub trait ScratchStore: Send + Sync {
    async fn put(&self, name: &ArtifactName, data: Bytes) -> Result<(), ScratchStoreError>;

    async fn fetch(&self, name: &ArtifactName) -> Result<Vec<u8>, ScratchStoreError>;

    /// Where the artifact lives on disk, for handing to local tooling.
    fn absolute_path(&self, name: &ArtifactName) -> PathBuf;
}
