mod groq_vision_client;
mod mock_vision_model;
mod vision_model_factory;

pub use groq_vision_client::GroqVisionClient;
pub use mock_vision_model::MockVisionModel;
pub use vision_model_factory::VisionModelFactory;
