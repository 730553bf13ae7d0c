use std::sync::Arc;

use tokio::net::TcpListener;

use medivoice::application::ports::{AudioPlayer, ScratchStore};
use medivoice::application::services::ConsultationService;
use medivoice::domain::ArtifactNamer;
use medivoice::infrastructure::audio::{PlaybackCommand, SymphoniaWavTranscoder};
use medivoice::infrastructure::observability::{init_tracing, TracingConfig};
use medivoice::infrastructure::speech::SynthesizerFactory;
use medivoice::infrastructure::storage::LocalScratchStore;
use medivoice::infrastructure::transcription::TranscriberFactory;
use medivoice::infrastructure::vision::VisionModelFactory;
use medivoice::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
            level: settings.logging.level.clone(),
        },
        settings.server.port,
    );

    if settings.scaffold_mode {
        tracing::warn!("Scaffold mode enabled, provider calls are mocked");
    }

    let scratch_store: Arc<dyn ScratchStore> =
        Arc::new(LocalScratchStore::new(&settings.storage.scratch_dir)?);
    let transcriber = TranscriberFactory::create(&settings.transcription, settings.scaffold_mode)?;
    let vision_model = VisionModelFactory::create(&settings.vision, settings.scaffold_mode)?;
    let synthesizer = SynthesizerFactory::create(&settings.speech, settings.scaffold_mode)?;

    let player: Option<Arc<dyn AudioPlayer>> = if settings.playback.enabled {
        match PlaybackCommand::resolve(std::env::consts::OS) {
            Ok(command) => {
                tracing::info!(player = %command, "Local playback enabled");
                Some(Arc::new(command))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Local playback unavailable, continuing without it");
                None
            }
        }
    } else {
        None
    };

    let namer = Arc::new(ArtifactNamer::new());

    let consultation_service = Arc::new(ConsultationService::new(
        transcriber,
        vision_model,
        synthesizer,
        Arc::clone(&scratch_store),
        Arc::new(SymphoniaWavTranscoder),
        player,
        Arc::clone(&namer),
    ));

    let state = AppState {
        consultation_service,
        scratch_store,
        namer,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let address = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", address);

    let listener = TcpListener::bind(address).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
