use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub transcription: TranscriptionSettings,
    pub vision: VisionSettings,
    pub speech: SpeechSettings,
    pub playback: PlaybackSettings,
    pub logging: LoggingSettings,
    /// Wire mock providers instead of real ones, so the service runs
    /// without any API keys.
    pub scaffold_mode: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub scratch_dir: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub api_key: String,
    pub base_url: String,
    pub voice_id: String,
    pub model: String,
    pub output_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackSettings {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layered load: built-in defaults, then `appsettings.{environment}`
    /// if present, then `APP`-prefixed environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let scratch_default = std::env::temp_dir()
            .join("medivoice")
            .to_string_lossy()
            .into_owned();

        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 7860)?
            .set_default("storage.scratch_dir", scratch_default)?
            .set_default("storage.max_upload_bytes", 16 * 1024 * 1024)?
            .set_default("transcription.api_key", "")?
            .set_default("transcription.base_url", "https://api.groq.com")?
            .set_default("transcription.model", "whisper-large-v3")?
            .set_default("vision.api_key", "")?
            .set_default("vision.base_url", "https://api.groq.com")?
            .set_default("vision.model", "meta-llama/llama-4-scout-17b-16e-instruct")?
            .set_default("speech.api_key", "")?
            .set_default("speech.base_url", "https://api.elevenlabs.io")?
            .set_default("speech.voice_id", "9BWtsMINqrJLrRacOk9x")?
            .set_default("speech.model", "eleven_turbo_v2")?
            .set_default("speech.output_format", "mp3_22050_32")?
            .set_default("playback.enabled", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("scaffold_mode", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        // PORT, GROQ_API_KEY and ELEVENLABS_API_KEY are also honored bare,
        // without the APP prefix.
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                settings.server.port = port;
            }
        }
        if settings.transcription.api_key.is_empty() {
            if let Ok(key) = std::env::var("GROQ_API_KEY") {
                settings.transcription.api_key = key;
            }
        }
        if settings.vision.api_key.is_empty() {
            if let Ok(key) = std::env::var("GROQ_API_KEY") {
                settings.vision.api_key = key;
            }
        }
        if settings.speech.api_key.is_empty() {
            if let Ok(key) = std::env::var("ELEVENLABS_API_KEY") {
                settings.speech.api_key = key;
            }
        }

        Ok(settings)
    }
}
