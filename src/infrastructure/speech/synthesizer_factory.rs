use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, SpeechSynthesizerError};
use crate::presentation::config::SpeechSettings;

use super::elevenlabs_synthesizer::ElevenLabsSynthesizer;
use super::mock_synthesizer::MockSpeechSynthesizer;

pub struct SynthesizerFactory;

impl SynthesizerFactory {
    pub fn create(
        settings: &SpeechSettings,
        scaffold_mode: bool,
    ) -> Result<Arc<dyn SpeechSynthesizer>, SpeechSynthesizerError> {
        if scaffold_mode {
            return Ok(Arc::new(MockSpeechSynthesizer));
        }
        if settings.api_key.is_empty() {
            return Err(SpeechSynthesizerError::Configuration(
                "api key required for ElevenLabs".to_string(),
            ));
        }
        Ok(Arc::new(ElevenLabsSynthesizer::new(settings)))
    }
}
