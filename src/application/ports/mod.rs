mod audio_player;
mod audio_transcoder;
mod scratch_store;
mod speech_synthesizer;
mod transcriber;
mod vision_model;

pub use audio_player::{AudioPlayer, PlaybackError};
pub use audio_transcoder::{AudioTranscoder, TranscodeError};
pub use scratch_store::{ScratchStore, ScratchStoreError};
pub use speech_synthesizer::{SpeechSynthesizer, SpeechSynthesizerError};
pub use transcriber::{Transcriber, TranscriberError};
pub use vision_model::{VisionModel, VisionModelError};
