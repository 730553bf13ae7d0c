use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioTranscoder, TranscodeError};

/// Decodes compressed provider audio and re-encodes it as 16-bit PCM WAV,
/// keeping the source sample rate and channel count.
pub fn transcode_to_wav(data: &[u8]) -> Result<Bytes, TranscodeError> {
    let (samples, source_rate, channels) = decode_interleaved(data)?;

    let spec = hound::WavSpec {
        channels: channels as u16,
        sample_rate: source_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)
        .map_err(|e| TranscodeError::EncodingFailed(format!("writer: {}", e)))?;
    for &sample in &samples {
        let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(quantized)
            .map_err(|e| TranscodeError::EncodingFailed(format!("sample: {}", e)))?;
    }
    writer
        .finalize()
        .map_err(|e| TranscodeError::EncodingFailed(format!("finalize: {}", e)))?;

    tracing::debug!(
        samples = samples.len(),
        sample_rate = source_rate,
        channels,
        "Transcoded reply audio to WAV"
    );

    Ok(Bytes::from(cursor.into_inner()))
}

fn decode_interleaved(data: &[u8]) -> Result<(Vec<f32>, u32, usize), TranscodeError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let hint = Hint::new();
    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();
    let decoder_opts = DecoderOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| TranscodeError::DecodingFailed(format!("probe: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| TranscodeError::DecodingFailed("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let source_rate = codec_params
        .sample_rate
        .ok_or_else(|| TranscodeError::DecodingFailed("unknown sample rate".to_string()))?;
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &decoder_opts)
        .map_err(|e| TranscodeError::DecodingFailed(format!("codec: {}", e)))?;

    let mut all_samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(TranscodeError::DecodingFailed(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(TranscodeError::DecodingFailed(format!("decode: {}", e)));
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }

        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        all_samples.extend_from_slice(sample_buf.samples());
    }

    if all_samples.is_empty() {
        return Err(TranscodeError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    Ok((all_samples, source_rate, channels))
}

/// Port adapter that runs the decode/encode pass off the async runtime.
pub struct SymphoniaWavTranscoder;

#[async_trait]
impl AudioTranscoder for SymphoniaWavTranscoder {
    async fn to_wav(&self, audio: Bytes) -> Result<Bytes, TranscodeError> {
        tokio::task::spawn_blocking(move || transcode_to_wav(&audio))
            .await
            .map_err(|e| TranscodeError::DecodingFailed(format!("task join: {}", e)))?
    }
}
