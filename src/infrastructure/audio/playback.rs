use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioPlayer, PlaybackError};

/// Which system player voices replies on this host. Resolved once at
/// startup from the operating system name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Afplay,
    PowerShell,
    Aplay,
}

impl PlaybackCommand {
    pub fn resolve(os: &str) -> Result<Self, PlaybackError> {
        match os {
            "macos" => Ok(Self::Afplay),
            "windows" => Ok(Self::PowerShell),
            "linux" => Ok(Self::Aplay),
            other => Err(PlaybackError::UnsupportedOs(other.to_string())),
        }
    }

    fn command(&self, wav_path: &Path) -> Command {
        match self {
            Self::Afplay => {
                let mut cmd = Command::new("afplay");
                cmd.arg(wav_path);
                cmd
            }
            Self::PowerShell => {
                let mut cmd = Command::new("powershell");
                cmd.arg("-c").arg(format!(
                    "(New-Object Media.SoundPlayer '{}').PlaySync();",
                    wav_path.display()
                ));
                cmd
            }
            Self::Aplay => {
                let mut cmd = Command::new("aplay");
                cmd.arg(wav_path);
                cmd
            }
        }
    }
}

impl fmt::Display for PlaybackCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Afplay => "afplay",
            Self::PowerShell => "powershell",
            Self::Aplay => "aplay",
        };
        write!(f, "{}", name)
    }
}

#[async_trait]
impl AudioPlayer for PlaybackCommand {
    async fn play(&self, wav_path: &Path) -> Result<(), PlaybackError> {
        let status = self
            .command(wav_path)
            .status()
            .await
            .map_err(|e| PlaybackError::SpawnFailed(format!("{}: {}", self, e)))?;
        if !status.success() {
            return Err(PlaybackError::CommandFailed(status.to_string()));
        }
        Ok(())
    }
}
