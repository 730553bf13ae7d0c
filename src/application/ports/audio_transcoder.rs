use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("wav encoding failed: {0}")]
    EncodingFailed(String),
}

/// Re-encodes provider audio into WAV for local playback.
#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    async fn to_wav(&self, audio: Bytes) -> Result<Bytes, TranscodeError>;
}
