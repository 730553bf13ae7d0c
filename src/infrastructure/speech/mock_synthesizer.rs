use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{SpeechSynthesizer, SpeechSynthesizerError};

const MOCK_SAMPLE_RATE: u32 = 22_050;

/// Emits a short silent WAV clip so the downstream transcode and storage
/// steps run against real audio in tests and scaffold mode.
pub struct MockSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<Bytes, SpeechSynthesizerError> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: MOCK_SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| SpeechSynthesizerError::ApiRequestFailed(format!("writer: {}", e)))?;
        for _ in 0..(MOCK_SAMPLE_RATE / 10) {
            writer
                .write_sample(0i16)
                .map_err(|e| SpeechSynthesizerError::ApiRequestFailed(format!("sample: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| SpeechSynthesizerError::ApiRequestFailed(format!("finalize: {}", e)))?;
        Ok(Bytes::from(cursor.into_inner()))
    }
}
