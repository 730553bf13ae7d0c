use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// An uploaded image encoded for inline transfer to a vision model.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    mime: &'static str,
    payload: String,
}

impl EncodedImage {
    /// The MIME type is inferred from the file name extension; anything
    /// that is not a `.png` is treated as JPEG.
    pub fn from_bytes(filename: &str, bytes: &[u8]) -> Self {
        let mime = if filename.to_ascii_lowercase().ends_with(".png") {
            "image/png"
        } else {
            "image/jpeg"
        };
        Self {
            mime,
            payload: STANDARD.encode(bytes),
        }
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn as_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.payload)
    }
}
