mod elevenlabs_synthesizer;
mod mock_synthesizer;
mod synthesizer_factory;

pub use elevenlabs_synthesizer::ElevenLabsSynthesizer;
pub use mock_synthesizer::MockSpeechSynthesizer;
pub use synthesizer_factory::SynthesizerFactory;
