use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesizer, Transcriber, VisionModel};
use crate::domain::ArtifactName;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SaveRecordingResponse {
    pub status: String,
    pub filename: String,
    pub audio_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a browser recording under the multipart field `audio` and
/// stores it under a fresh stamped name.
#[tracing::instrument(skip(state, multipart))]
pub async fn save_recording_handler<T, V, S>(
    State(state): State<AppState<T, V, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    T: Transcriber + 'static + ?Sized,
    V: VisionModel + 'static + ?Sized,
    S: SpeechSynthesizer + 'static + ?Sized,
{
    let audio_field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("audio") {
                    break field;
                }
            }
            Ok(None) => {
                tracing::warn!("Recording upload without an audio field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No audio file".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    };

    let has_filename = audio_field
        .file_name()
        .map(|name| !name.is_empty())
        .unwrap_or(false);
    if !has_filename {
        tracing::warn!("Recording upload with an empty file name");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No selected file".to_string(),
            }),
        )
            .into_response();
    }

    let data = match audio_field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    if data.is_empty() {
        tracing::warn!("Recording upload with an empty payload");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Empty audio file".to_string(),
            }),
        )
            .into_response();
    }

    let filename = ArtifactName::recording_wav(state.namer.next_stamp());

    if let Err(e) = state.scratch_store.put(&filename, data).await {
        tracing::error!(error = %e, artifact = %filename, "Failed to store recording");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(artifact = %filename, "Recording saved");

    (
        StatusCode::OK,
        Json(SaveRecordingResponse {
            status: "success".to_string(),
            filename: filename.to_string(),
            audio_url: format!("/get_audio/{}", filename),
        }),
    )
        .into_response()
}
