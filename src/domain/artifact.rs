use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvalidArtifactName {
    #[error("artifact name is empty")]
    Empty,
    #[error("artifact name escapes the scratch directory: {0}")]
    PathEscape(String),
}

/// A bare file name inside the scratch directory. Never a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidArtifactName> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidArtifactName::Empty);
        }
        if trimmed.contains('/') || trimmed.contains('\\') || trimmed.contains("..") {
            return Err(InvalidArtifactName::PathEscape(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Reduces an untrusted upload file name to a safe artifact name.
    ///
    /// Keeps the final path component, replaces anything outside
    /// `[A-Za-z0-9._-]` with underscores and strips leading and trailing
    /// dots and underscores so the result cannot hide or escape.
    pub fn sanitize(raw: &str) -> Result<Self, InvalidArtifactName> {
        let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
        let cleaned: String = base
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let cleaned = cleaned.trim_matches(|c| c == '.' || c == '_');
        if cleaned.is_empty() {
            return Err(InvalidArtifactName::Empty);
        }
        Ok(Self(cleaned.to_string()))
    }

    pub fn recording_wav(stamp: u64) -> Self {
        Self(format!("recording_{stamp}.wav"))
    }

    pub fn response_mp3(stamp: u64) -> Self {
        Self(format!("response_{stamp}.mp3"))
    }

    pub fn response_wav(stamp: u64) -> Self {
        Self(format!("response_{stamp}.wav"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out strictly increasing integer stamps for artifact names.
///
/// Seeded from the wall clock in milliseconds; concurrent callers never
/// observe the same stamp twice, even within one millisecond.
#[derive(Debug)]
pub struct ArtifactNamer {
    last_stamp: AtomicU64,
}

impl ArtifactNamer {
    pub fn new() -> Self {
        Self {
            last_stamp: AtomicU64::new(Self::epoch_millis()),
        }
    }

    pub fn next_stamp(&self) -> u64 {
        let now = Self::epoch_millis();
        let prev = self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev + 1))
            })
            .unwrap_or(now);
        now.max(prev + 1)
    }

    fn epoch_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

impl Default for ArtifactNamer {
    fn default() -> Self {
        Self::new()
    }
}
