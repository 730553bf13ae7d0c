use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{SpeechSynthesizer, Transcriber, VisionModel};
use crate::presentation::handlers::{
    get_audio_handler, health_handler, home_handler, process_handler, save_recording_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<T, V, S>(state: AppState<T, V, S>) -> Router
where
    T: Transcriber + 'static + ?Sized,
    V: VisionModel + 'static + ?Sized,
    S: SpeechSynthesizer + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload = state.settings.storage.max_upload_bytes;

    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/save_recording", post(save_recording_handler::<T, V, S>))
        .route("/process", post(process_handler::<T, V, S>))
        .route("/get_audio/{filename}", get(get_audio_handler::<T, V, S>))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
