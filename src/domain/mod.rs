mod artifact;
mod consultation;
mod encoded_image;

pub use artifact::{ArtifactName, ArtifactNamer, InvalidArtifactName};
pub use consultation::Consultation;
pub use encoded_image::EncodedImage;
