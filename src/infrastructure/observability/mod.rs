mod init_tracing;
mod log_sanitizer;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use log_sanitizer::truncate_for_log;
pub use tracing_config::TracingConfig;
