use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{EngineError, LocalSpeechEngine, ToolLocator};

/// Candidate binary names, probed in order.
const ENGINE_BINARIES: &[&str] = &["espeak-ng", "espeak"];

/// On-machine speech engine backed by an espeak subprocess. Renders plain
/// text directly to an uncompressed WAV file; no network involved.
pub struct EspeakEngine {
    locator: Arc<dyn ToolLocator>,
    /// Words per minute passed to the engine.
    speaking_rate: u32,
}

impl EspeakEngine {
    pub fn new(locator: Arc<dyn ToolLocator>, speaking_rate: u32) -> Self {
        Self {
            locator,
            speaking_rate,
        }
    }

    fn engine_path(&self) -> Option<PathBuf> {
        ENGINE_BINARIES
            .iter()
            .find_map(|name| self.locator.locate(name))
    }

    pub fn is_available(&self) -> bool {
        self.engine_path().is_some()
    }
}

#[async_trait]
impl LocalSpeechEngine for EspeakEngine {
    async fn render(&self, text: &str, output: &Path) -> Result<(), EngineError> {
        let binary = self
            .engine_path()
            .ok_or_else(|| EngineError::NotAvailable("espeak binary not found".to_string()))?;

        let status = Command::new(&binary)
            .arg("-s")
            .arg(self.speaking_rate.to_string())
            .arg("-w")
            .arg(output)
            .arg(text)
            .status()
            .await?;

        if !status.success() {
            return Err(EngineError::RenderFailed(format!(
                "{} exited with {}",
                binary.display(),
                status
            )));
        }

        // The engine reports success even for inputs it renders to nothing;
        // an empty file is not playable output.
        let metadata = tokio::fs::metadata(output).await?;
        if metadata.len() == 0 {
            return Err(EngineError::RenderFailed(
                "engine produced an empty file".to_string(),
            ));
        }

        tracing::debug!(
            engine = %binary.display(),
            bytes = metadata.len(),
            "Local speech engine rendered audio"
        );

        Ok(())
    }
}
