use std::sync::Arc;

use crate::application::ports::{ScratchStore, SpeechSynthesizer, Transcriber, VisionModel};
use crate::application::services::ConsultationService;
use crate::domain::ArtifactNamer;
use crate::presentation::config::Settings;

pub struct AppState<T, V, S>
where
    T: Transcriber + ?Sized,
    V: VisionModel + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    pub consultation_service: Arc<ConsultationService<T, V, S>>,
    pub scratch_store: Arc<dyn ScratchStore>,
    pub namer: Arc<ArtifactNamer>,
    pub settings: Settings,
}

impl<T, V, S> Clone for AppState<T, V, S>
where
    T: Transcriber + ?Sized,
    V: VisionModel + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            consultation_service: Arc::clone(&self.consultation_service),
            scratch_store: Arc::clone(&self.scratch_store),
            namer: Arc::clone(&self.namer),
            settings: self.settings.clone(),
        }
    }
}
