use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("unsupported operating system: {0}")]
    UnsupportedOs(String),
    #[error("player spawn failed: {0}")]
    SpawnFailed(String),
    #[error("player exited with {0}")]
    CommandFailed(String),
}

/// Best-effort playback of a stored WAV on the host machine.
///
/// Failures are reported for logging only and never abort a consultation.
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    async fn play(&self, wav_path: &Path) -> Result<(), PlaybackError>;
}
