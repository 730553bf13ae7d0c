use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriberError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Turns a recorded patient audio clip into text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, TranscriberError>;
}
