mod get_audio;
mod health;
mod home;
mod process;
mod save_recording;

pub use get_audio::get_audio_handler;
pub use health::health_handler;
pub use home::home_handler;
pub use process::process_handler;
pub use save_recording::save_recording_handler;
