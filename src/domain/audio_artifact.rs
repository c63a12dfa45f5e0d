use serde::{Deserialize, Serialize};

/// Container format of an audio artifact's byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Wav => "audio/wav",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl TryFrom<&str> for AudioFormat {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "wav" => Ok(Self::Wav),
            other => Err(format!("Unsupported audio format: {}", other)),
        }
    }
}

/// Which tier of the synthesis pipeline produced the audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioSource {
    RemoteTts,
    LocalEngine,
    Placeholder,
}

impl AudioSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioSource::RemoteTts => "remote_tts",
            AudioSource::LocalEngine => "local_engine",
            AudioSource::Placeholder => "placeholder",
        }
    }
}

/// A playable audio rendition of tutorial content.
///
/// Invariant: `bytes` is never empty. The placeholder tier of the synthesis
/// pipeline guarantees this even when every real engine is unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioArtifact {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
    pub duration_estimate_seconds: f32,
    pub source: AudioSource,
    /// Relative path in the artifact store, when the side write succeeded.
    pub stored_path: Option<String>,
}
