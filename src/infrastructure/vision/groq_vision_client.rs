use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{VisionModel, VisionModelError};
use crate::domain::EncodedImage;
use crate::presentation::config::VisionSettings;

/// Multimodal chat through Groq's OpenAI-compatible completions endpoint.
pub struct GroqVisionClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqVisionClient {
    pub fn new(settings: &VisionSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl VisionModel for GroqVisionClient {
    async fn analyze(
        &self,
        query: &str,
        image: Option<&EncodedImage>,
    ) -> Result<String, VisionModelError> {
        let mut content = vec![serde_json::json!({ "type": "text", "text": query })];
        if let Some(image) = image {
            content.push(serde_json::json!({
                "type": "image_url",
                "image_url": { "url": image.as_data_uri() }
            }));
        }

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": content
                }
            ]
        });

        let url = format!("{}/openai/v1/chat/completions", self.base_url);

        tracing::debug!(
            model = %self.model,
            with_image = image.is_some(),
            "Sending consultation query to Groq"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| VisionModelError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(VisionModelError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| VisionModelError::InvalidResponse(format!("body: {}", e)))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| VisionModelError::InvalidResponse("no choices in response".to_string()))?
            .message
            .content
            .unwrap_or_default();

        tracing::info!(chars = reply.len(), "Groq vision analysis completed");

        Ok(reply)
    }
}
