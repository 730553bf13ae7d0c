use std::sync::Arc;

use crate::application::ports::{VisionModel, VisionModelError};
use crate::presentation::config::VisionSettings;

use super::groq_vision_client::GroqVisionClient;
use super::mock_vision_model::MockVisionModel;

pub struct VisionModelFactory;

impl VisionModelFactory {
    pub fn create(
        settings: &VisionSettings,
        scaffold_mode: bool,
    ) -> Result<Arc<dyn VisionModel>, VisionModelError> {
        if scaffold_mode {
            return Ok(Arc::new(MockVisionModel));
        }
        if settings.api_key.is_empty() {
            return Err(VisionModelError::Configuration(
                "api key required for Groq vision".to_string(),
            ));
        }
        Ok(Arc::new(GroqVisionClient::new(settings)))
    }
}
