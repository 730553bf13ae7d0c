use std::sync::Arc;

use crate::application::ports::{Transcriber, TranscriberError};
use crate::presentation::config::TranscriptionSettings;

use super::groq_whisper_engine::GroqWhisperEngine;
use super::mock_transcriber::MockTranscriber;

pub struct TranscriberFactory;

impl TranscriberFactory {
    pub fn create(
        settings: &TranscriptionSettings,
        scaffold_mode: bool,
    ) -> Result<Arc<dyn Transcriber>, TranscriberError> {
        if scaffold_mode {
            return Ok(Arc::new(MockTranscriber));
        }
        if settings.api_key.is_empty() {
            return Err(TranscriberError::Configuration(
                "api key required for Groq Whisper".to_string(),
            ));
        }
        Ok(Arc::new(GroqWhisperEngine::new(settings)))
    }
}
