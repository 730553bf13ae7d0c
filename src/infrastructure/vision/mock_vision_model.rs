use async_trait::async_trait;

use crate::application::ports::{VisionModel, VisionModelError};
use crate::domain::EncodedImage;

/// Canned doctor reply for tests and scaffold mode.
pub struct MockVisionModel;

#[async_trait]
impl VisionModel for MockVisionModel {
    async fn analyze(
        &self,
        _query: &str,
        _image: Option<&EncodedImage>,
    ) -> Result<String, VisionModelError> {
        Ok("With what I see, I think you have a mild contact dermatitis, keep the area \
            clean and an over the counter hydrocortisone cream should settle it within a few days"
            .to_string())
    }
}
