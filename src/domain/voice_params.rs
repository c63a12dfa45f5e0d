use serde::{Deserialize, Serialize};

use super::AudioFormat;

/// Voice parameters for speech synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceParams {
    pub voice: String,
    /// Speech speed multiplier, 0.25 to 4.0.
    pub speed: f32,
    /// Format requested from the remote tier and targeted by transcoding.
    /// The artifact's actual format may differ when fallbacks engage.
    pub format: AudioFormat,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            voice: "alloy".to_string(),
            speed: 1.0,
            format: AudioFormat::Mp3,
        }
    }
}
