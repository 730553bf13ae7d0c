use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::application::ports::{
    ScratchStoreError, SpeechSynthesizer, Transcriber, VisionModel,
};
use crate::domain::ArtifactName;
use crate::presentation::state::AppState;

/// Serves a stored audio artifact. Names that fail validation get the
/// same not-found answer as genuinely missing files.
#[tracing::instrument(skip(state))]
pub async fn get_audio_handler<T, V, S>(
    State(state): State<AppState<T, V, S>>,
    Path(filename): Path<String>,
) -> impl IntoResponse
where
    T: Transcriber + 'static + ?Sized,
    V: VisionModel + 'static + ?Sized,
    S: SpeechSynthesizer + 'static + ?Sized,
{
    let name = match ArtifactName::new(filename) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected audio artifact name");
            return (StatusCode::NOT_FOUND, "Audio file not found").into_response();
        }
    };

    match state.scratch_store.fetch(&name).await {
        Ok(data) => ([(header::CONTENT_TYPE, "audio/mpeg")], data).into_response(),
        Err(ScratchStoreError::NotFound(_)) => {
            tracing::debug!(artifact = %name, "Audio artifact not found");
            (StatusCode::NOT_FOUND, "Audio file not found").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, artifact = %name, "Failed to read audio artifact");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
