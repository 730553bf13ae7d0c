use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use medivoice::application::ports::{SpeechSynthesizer, SpeechSynthesizerError};
use medivoice::infrastructure::speech::ElevenLabsSynthesizer;
use medivoice::presentation::config::SpeechSettings;

const FAKE_MP3: &[u8] = b"ID3 fake mp3 payload";

#[derive(Debug, Clone)]
struct SeenRequest {
    voice_id: String,
    api_key: Option<String>,
    output_format: Option<String>,
    body: serde_json::Value,
}

type Captured = Arc<Mutex<Option<SeenRequest>>>;

async fn start_mock_elevenlabs_server(
    response_status: u16,
) -> (String, Captured, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured: Captured = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&captured);

    let app = Router::new().route(
        "/v1/text-to-speech/{voice_id}",
        post(
            move |Path(voice_id): Path<String>,
                  Query(params): Query<HashMap<String, String>>,
                  headers: HeaderMap,
                  Json(body): Json<serde_json::Value>| {
                let sink = Arc::clone(&sink);
                async move {
                    *sink.lock().unwrap() = Some(SeenRequest {
                        voice_id,
                        api_key: headers
                            .get("xi-api-key")
                            .and_then(|v| v.to_str().ok())
                            .map(String::from),
                        output_format: params.get("output_format").cloned(),
                        body,
                    });
                    let status = axum::http::StatusCode::from_u16(response_status).unwrap();
                    (status, FAKE_MP3).into_response()
                }
            },
        ),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

fn settings(base_url: &str) -> SpeechSettings {
    SpeechSettings {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        voice_id: "9BWtsMINqrJLrRacOk9x".to_string(),
        model: "eleven_turbo_v2".to_string(),
        output_format: "mp3_22050_32".to_string(),
    }
}

#[tokio::test]
async fn given_reply_text_when_synthesizing_then_returns_provider_audio() {
    let (base_url, _captured, shutdown_tx) = start_mock_elevenlabs_server(200).await;

    let synthesizer = ElevenLabsSynthesizer::new(&settings(&base_url));
    let audio = synthesizer.synthesize("you have eczema").await.unwrap();

    assert_eq!(audio.as_ref(), FAKE_MP3);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_reply_text_when_synthesizing_then_addresses_configured_voice() {
    let (base_url, captured, shutdown_tx) = start_mock_elevenlabs_server(200).await;

    let synthesizer = ElevenLabsSynthesizer::new(&settings(&base_url));
    synthesizer.synthesize("you have eczema").await.unwrap();

    let seen = captured.lock().unwrap().clone().unwrap();
    assert_eq!(seen.voice_id, "9BWtsMINqrJLrRacOk9x");
    assert_eq!(seen.api_key.as_deref(), Some("test-key"));
    assert_eq!(seen.output_format.as_deref(), Some("mp3_22050_32"));
    assert_eq!(seen.body["text"], "you have eczema");
    assert_eq!(seen.body["model_id"], "eleven_turbo_v2");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_error_status_when_synthesizing_then_returns_api_error() {
    let (base_url, _captured, shutdown_tx) = start_mock_elevenlabs_server(401).await;

    let synthesizer = ElevenLabsSynthesizer::new(&settings(&base_url));
    let result = synthesizer.synthesize("you have eczema").await;

    assert!(matches!(
        result,
        Err(SpeechSynthesizerError::ApiRequestFailed(_))
    ));
    shutdown_tx.send(()).ok();
}
