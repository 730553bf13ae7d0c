use crate::domain::ArtifactName;

/// The outcome of one full consultation round.
#[derive(Debug, Clone)]
pub struct Consultation {
    /// What the patient said, as transcribed.
    pub transcript: String,
    /// The doctor persona's spoken reply.
    pub doctor_reply: String,
    /// Stored synthesized audio of the reply.
    pub voice_artifact: ArtifactName,
}
