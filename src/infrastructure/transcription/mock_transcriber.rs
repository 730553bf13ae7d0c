use async_trait::async_trait;

use crate::application::ports::{Transcriber, TranscriberError};

/// Canned transcript for tests and scaffold mode.
pub struct MockTranscriber;

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> Result<String, TranscriberError> {
        Ok("I have a rash on my arm and it has been itching since yesterday".to_string())
    }
}
