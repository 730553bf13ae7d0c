use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesizer, Transcriber, VisionModel};
use crate::application::services::ImageUpload;
use crate::domain::ArtifactName;
use crate::infrastructure::observability::truncate_for_log;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ProcessResponse {
    pub status: String,
    pub speech_to_text: String,
    pub doctor_response: String,
    pub voice_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Runs a full consultation over a previously saved recording. Expects a
/// multipart form with an `audio_filename` text field and an optional
/// `image` file field.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_handler<T, V, S>(
    State(state): State<AppState<T, V, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    T: Transcriber + 'static + ?Sized,
    V: VisionModel + 'static + ?Sized,
    S: SpeechSynthesizer + 'static + ?Sized,
{
    let mut audio_filename: Option<String> = None;
    let mut image: Option<ImageUpload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
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
        };

        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "audio_filename" => match field.text().await {
                Ok(value) => audio_filename = Some(value),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read audio_filename field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read field: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            "image" => {
                let upload_name = field.file_name().unwrap_or("").to_string();
                if upload_name.is_empty() {
                    continue;
                }
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read image bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };
                match ArtifactName::sanitize(&upload_name) {
                    Ok(name) => image = Some(ImageUpload { name, data }),
                    Err(e) => {
                        tracing::warn!(error = %e, filename = %upload_name, "Ignoring unusable image name");
                    }
                }
            }
            _ => {}
        }
    }

    let raw_name = match audio_filename {
        Some(name) if !name.is_empty() => name,
        _ => {
            tracing::warn!("Consultation request without a recording name");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No audio provided".to_string(),
                }),
            )
                .into_response();
        }
    };

    let recording = match ArtifactName::new(raw_name) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected recording name");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.consultation_service.consult(&recording, image).await {
        Ok(consultation) => {
            tracing::info!(
                transcript = %truncate_for_log(&consultation.transcript),
                reply = %truncate_for_log(&consultation.doctor_reply),
                voice = %consultation.voice_artifact,
                "Consultation complete"
            );
            (
                StatusCode::OK,
                Json(ProcessResponse {
                    status: "success".to_string(),
                    speech_to_text: consultation.transcript,
                    doctor_response: consultation.doctor_reply,
                    voice_url: format!("/get_audio/{}", consultation.voice_artifact),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, artifact = %recording, "Consultation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
