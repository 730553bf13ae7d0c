use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{SpeechSynthesizer, SpeechSynthesizerError};
use crate::presentation::config::SpeechSettings;

/// Text-to-speech through the ElevenLabs HTTP API.
pub struct ElevenLabsSynthesizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    voice_id: String,
    model: String,
    output_format: String,
}

impl ElevenLabsSynthesizer {
    pub fn new(settings: &SpeechSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
            voice_id: settings.voice_id.clone(),
            model: settings.model.clone(),
            output_format: settings.output_format.clone(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Bytes, SpeechSynthesizerError> {
        let url = format!(
            "{}/v1/text-to-speech/{}?output_format={}",
            self.base_url, self.voice_id, self.output_format
        );

        let body = serde_json::json!({
            "text": text,
            "model_id": self.model,
        });

        tracing::debug!(
            voice_id = %self.voice_id,
            chars = text.len(),
            "Sending reply text to ElevenLabs"
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechSynthesizerError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SpeechSynthesizerError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechSynthesizerError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::info!(bytes = audio.len(), "ElevenLabs synthesis completed");

        Ok(audio)
    }
}
