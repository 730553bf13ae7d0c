mod groq_whisper_engine;
mod mock_transcriber;
mod transcriber_factory;

pub use groq_whisper_engine::GroqWhisperEngine;
pub use mock_transcriber::MockTranscriber;
pub use transcriber_factory::TranscriberFactory;
