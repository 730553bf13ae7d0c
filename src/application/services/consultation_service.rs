use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;

use crate::application::ports::{
    AudioPlayer, AudioTranscoder, ScratchStore, ScratchStoreError, SpeechSynthesizer,
    SpeechSynthesizerError, TranscodeError, Transcriber, TranscriberError, VisionModel,
    VisionModelError,
};
use crate::domain::{ArtifactName, ArtifactNamer, Consultation, EncodedImage};

/// Persona instructions prepended to every vision query. The transcript of
/// the patient recording is appended after this text.
pub const DOCTOR_PREAMBLE: &str = "You have to act as a professional doctor, i know you are not but this is for learning purpose. What's in this image?. Do you find anything wrong with it medically? If you make a differential, suggest some remedies for them. Donot add any numbers or special characters in your response. Your response should be in one long paragraph. Also always answer as if you are answering to a real person. Donot say 'In the image I see' but say 'With what I see, I think you have ....' Dont respond as an AI model in markdown, your answer should mimic that of an actual doctor not an AI bot, Keep your answer concise (max 2 sentences). No preamble, start your answer right away please";

#[derive(Debug, Error)]
pub enum ConsultationError {
    #[error("capture: {0}")]
    Capture(#[from] ScratchStoreError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriberError),
    #[error("analysis: {0}")]
    Analysis(#[from] VisionModelError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SpeechSynthesizerError),
    #[error("transcoding: {0}")]
    Transcoding(#[from] TranscodeError),
}

/// An image the patient attached to a consultation, already reduced to a
/// safe artifact name.
pub struct ImageUpload {
    pub name: ArtifactName,
    pub data: Bytes,
}

/// Runs one consultation end to end: transcribe the recording, put the
/// transcript to the vision model, voice the reply and store both audio
/// renditions of it.
pub struct ConsultationService<T, V, S>
where
    T: Transcriber + ?Sized,
    V: VisionModel + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    transcriber: Arc<T>,
    vision_model: Arc<V>,
    synthesizer: Arc<S>,
    scratch_store: Arc<dyn ScratchStore>,
    transcoder: Arc<dyn AudioTranscoder>,
    player: Option<Arc<dyn AudioPlayer>>,
    namer: Arc<ArtifactNamer>,
}

impl<T, V, S> ConsultationService<T, V, S>
where
    T: Transcriber + ?Sized,
    V: VisionModel + ?Sized,
    S: SpeechSynthesizer + ?Sized,
{
    pub fn new(
        transcriber: Arc<T>,
        vision_model: Arc<V>,
        synthesizer: Arc<S>,
        scratch_store: Arc<dyn ScratchStore>,
        transcoder: Arc<dyn AudioTranscoder>,
        player: Option<Arc<dyn AudioPlayer>>,
        namer: Arc<ArtifactNamer>,
    ) -> Self {
        Self {
            transcriber,
            vision_model,
            synthesizer,
            scratch_store,
            transcoder,
            player,
            namer,
        }
    }

    pub async fn consult(
        &self,
        recording: &ArtifactName,
        image: Option<ImageUpload>,
    ) -> Result<Consultation, ConsultationError> {
        let audio = self.scratch_store.fetch(recording).await?;
        tracing::debug!(
            artifact = %recording,
            bytes = audio.len(),
            "Transcribing patient recording"
        );
        let transcript = self.transcriber.transcribe(&audio).await?;
        tracing::info!(chars = transcript.len(), "Transcription complete");

        let encoded_image = match image {
            Some(upload) => Some(self.store_image(upload).await?),
            None => None,
        };

        let query = format!("{} {}", DOCTOR_PREAMBLE, transcript);
        let doctor_reply = self
            .vision_model
            .analyze(&query, encoded_image.as_ref())
            .await?;
        tracing::info!(chars = doctor_reply.len(), "Doctor reply ready");

        let speech = self.synthesizer.synthesize(&doctor_reply).await?;
        let voice_artifact = self.store_reply_audio(speech).await?;

        Ok(Consultation {
            transcript,
            doctor_reply,
            voice_artifact,
        })
    }

    async fn store_image(&self, upload: ImageUpload) -> Result<EncodedImage, ConsultationError> {
        let encoded = EncodedImage::from_bytes(upload.name.as_str(), &upload.data);
        self.scratch_store.put(&upload.name, upload.data).await?;
        tracing::debug!(artifact = %upload.name, mime = encoded.mime(), "Stored consultation image");
        Ok(encoded)
    }

    /// Stores the provider audio, then a WAV rendition under the same stamp.
    /// Playback of the WAV is attempted when a player is configured, and its
    /// failures are logged rather than surfaced.
    async fn store_reply_audio(&self, speech: Bytes) -> Result<ArtifactName, ConsultationError> {
        let stamp = self.namer.next_stamp();

        let voice_artifact = ArtifactName::response_mp3(stamp);
        self.scratch_store
            .put(&voice_artifact, speech.clone())
            .await?;

        let wav = self.transcoder.to_wav(speech).await?;
        let wav_artifact = ArtifactName::response_wav(stamp);
        self.scratch_store.put(&wav_artifact, wav).await?;

        if let Some(player) = &self.player {
            let wav_path = self.scratch_store.absolute_path(&wav_artifact);
            if let Err(e) = player.play(&wav_path).await {
                tracing::warn!(error = %e, artifact = %wav_artifact, "Local playback failed");
            }
        }

        Ok(voice_artifact)
    }
}
