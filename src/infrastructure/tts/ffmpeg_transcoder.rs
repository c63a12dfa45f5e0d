use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{ToolLocator, TranscodeError, Transcoder};

const CODEC_BINARY: &str = "ffmpeg";

/// Best-effort WAV-to-MP3 transcoding through an ffmpeg binary discovered at
/// call time. Absence of the binary is an ordinary condition, surfaced via
/// `is_available` so the audio pipeline can skip the step.
pub struct FfmpegTranscoder {
    locator: Arc<dyn ToolLocator>,
    bitrate_kbps: u32,
}

impl FfmpegTranscoder {
    pub fn new(locator: Arc<dyn ToolLocator>, bitrate_kbps: u32) -> Self {
        Self {
            locator,
            bitrate_kbps,
        }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    fn is_available(&self) -> bool {
        self.locator.locate(CODEC_BINARY).is_some()
    }

    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let binary = self
            .locator
            .locate(CODEC_BINARY)
            .ok_or(TranscodeError::ToolNotFound)?;

        let status = Command::new(&binary)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-b:a")
            .arg(format!("{}k", self.bitrate_kbps))
            .arg(output)
            .status()
            .await?;

        if !status.success() {
            return Err(TranscodeError::Failed(format!(
                "ffmpeg exited with {}",
                status
            )));
        }

        Ok(())
    }
}
