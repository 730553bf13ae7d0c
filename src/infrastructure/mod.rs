pub mod audio;
pub mod observability;
pub mod speech;
pub mod storage;
pub mod transcription;
pub mod vision;
