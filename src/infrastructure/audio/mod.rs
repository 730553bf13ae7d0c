mod playback;
pub mod wav_transcoder;

pub use playback::PlaybackCommand;
pub use wav_transcoder::SymphoniaWavTranscoder;
