mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, PlaybackSettings, ServerSettings, Settings, SpeechSettings, StorageSettings,
    TranscriptionSettings, VisionSettings,
};
