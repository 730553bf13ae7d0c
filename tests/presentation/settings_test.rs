use medivoice::presentation::{Environment, Settings};

#[test]
fn given_no_overrides_when_loading_then_provider_defaults_apply() {
    let settings = Settings::load(Environment::Local).unwrap();

    assert_eq!(settings.transcription.base_url, "https://api.groq.com");
    assert_eq!(settings.transcription.model, "whisper-large-v3");
    assert_eq!(settings.vision.base_url, "https://api.groq.com");
    assert_eq!(
        settings.vision.model,
        "meta-llama/llama-4-scout-17b-16e-instruct"
    );
    assert_eq!(settings.speech.base_url, "https://api.elevenlabs.io");
    assert_eq!(settings.speech.voice_id, "9BWtsMINqrJLrRacOk9x");
    assert_eq!(settings.speech.model, "eleven_turbo_v2");
    assert_eq!(settings.speech.output_format, "mp3_22050_32");
}

#[test]
fn given_no_overrides_when_loading_then_server_and_storage_defaults_apply() {
    let settings = Settings::load(Environment::Local).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.storage.max_upload_bytes, 16 * 1024 * 1024);
    assert!(!settings.storage.scratch_dir.is_empty());
    assert!(!settings.playback.enabled);
    assert!(!settings.scaffold_mode);
}

#[test]
fn given_missing_settings_file_when_loading_then_built_in_defaults_still_load() {
    // No appsettings.production.yaml ships with the repo.
    let settings = Settings::load(Environment::Production).unwrap();

    assert_eq!(settings.transcription.model, "whisper-large-v3");
    assert_eq!(settings.logging.level, "info");
    assert!(!settings.logging.enable_json);
}
