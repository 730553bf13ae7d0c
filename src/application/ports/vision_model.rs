use async_trait::async_trait;
use thiserror::Error;

use crate::domain::EncodedImage;

#[derive(Debug, Error)]
pub enum VisionModelError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Answers a free-form query, optionally grounded in one image.
#[async_trait]
pub trait VisionModel: Send + Sync {
    async fn analyze(
        &self,
        query: &str,
        image: Option<&EncodedImage>,
    ) -> Result<String, VisionModelError>;
}
