use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::application::ports::{
    ArtifactStore, LocalSpeechEngine, SpeechSynthesizer, Transcoder,
};
use crate::domain::{AudioArtifact, AudioFormat, AudioSource, VoiceParams};
use crate::infrastructure::text_processing::normalize_for_speech;
use crate::infrastructure::tts::{PLACEHOLDER_SECONDS, placeholder_wav};

/// Spoken-word rate used to estimate artifact duration from the text.
const WORDS_PER_SPOKEN_MINUTE: f32 = 140.0;

/// Three-tier audio synthesis: remote providers, then the local speech
/// engine with best-effort transcoding, then a silent placeholder.
///
/// Never fails. Every tier degradation is logged at warn level and the
/// artifact records which tier actually produced the bytes.
pub struct AudioService {
    synthesizers: Vec<Arc<dyn SpeechSynthesizer>>,
    engine: Arc<dyn LocalSpeechEngine>,
    transcoder: Arc<dyn Transcoder>,
    store: Arc<dyn ArtifactStore>,
}

impl AudioService {
    pub fn new(
        synthesizers: Vec<Arc<dyn SpeechSynthesizer>>,
        engine: Arc<dyn LocalSpeechEngine>,
        transcoder: Arc<dyn Transcoder>,
        store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            synthesizers,
            engine,
            transcoder,
            store,
        }
    }

    pub fn synthesizer_ids(&self) -> Vec<String> {
        self.synthesizers
            .iter()
            .map(|s| s.id().to_string())
            .collect()
    }

    pub async fn synthesize(&self, text: &str, params: &VoiceParams) -> AudioArtifact {
        let speech_text = normalize_for_speech(text);
        let duration_estimate = estimate_duration_seconds(&speech_text);

        let mut artifact = match self.remote_tier(&speech_text, params, duration_estimate).await {
            Some(artifact) => artifact,
            None => match self.local_tier(&speech_text, params, duration_estimate).await {
                Some(artifact) => artifact,
                None => {
                    tracing::warn!("All audio tiers failed, serving silent placeholder");
                    AudioArtifact {
                        bytes: placeholder_wav(),
                        format: AudioFormat::Wav,
                        duration_estimate_seconds: PLACEHOLDER_SECONDS as f32,
                        source: AudioSource::Placeholder,
                        stored_path: None,
                    }
                }
            },
        };

        artifact.stored_path = self.persist(&artifact).await;
        artifact
    }

    async fn remote_tier(
        &self,
        text: &str,
        params: &VoiceParams,
        duration_estimate: f32,
    ) -> Option<AudioArtifact> {
        for synthesizer in &self.synthesizers {
            match synthesizer.synthesize(text, params).await {
                Ok(bytes) if !bytes.is_empty() => {
                    tracing::info!(
                        provider = synthesizer.id(),
                        bytes = bytes.len(),
                        "Remote speech synthesis succeeded"
                    );
                    return Some(AudioArtifact {
                        format: synthesizer.output_format(params),
                        bytes,
                        duration_estimate_seconds: duration_estimate,
                        source: AudioSource::RemoteTts,
                        stored_path: None,
                    });
                }
                Ok(_) => {
                    tracing::warn!(
                        provider = synthesizer.id(),
                        "Speech provider returned empty payload, advancing"
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        provider = synthesizer.id(),
                        %error,
                        "Speech provider failed, advancing"
                    );
                }
            }
        }
        None
    }

    async fn local_tier(
        &self,
        text: &str,
        params: &VoiceParams,
        duration_estimate: f32,
    ) -> Option<AudioArtifact> {
        let workdir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(error) => {
                tracing::warn!(%error, "Could not create scratch directory for local engine");
                return None;
            }
        };
        let wav_path = workdir.path().join("speech.wav");

        if let Err(error) = self.engine.render(text, &wav_path).await {
            tracing::warn!(%error, "Local speech engine failed");
            return None;
        }

        let (path, format) = self.transcode_if_possible(&wav_path, workdir.path(), params).await;

        match tokio::fs::read(&path).await {
            Ok(bytes) if !bytes.is_empty() => Some(AudioArtifact {
                bytes,
                format,
                duration_estimate_seconds: duration_estimate,
                source: AudioSource::LocalEngine,
                stored_path: None,
            }),
            Ok(_) => {
                tracing::warn!("Local engine produced an empty file");
                None
            }
            Err(error) => {
                tracing::warn!(%error, "Could not read rendered audio file");
                None
            }
        }
    }

    /// Transcodes the rendered WAV toward the requested format when the codec
    /// tool is present. On any miss the WAV is served as-is with its format
    /// reported honestly.
    async fn transcode_if_possible(
        &self,
        wav_path: &Path,
        workdir: &Path,
        params: &VoiceParams,
    ) -> (std::path::PathBuf, AudioFormat) {
        if params.format != AudioFormat::Mp3 || !self.transcoder.is_available() {
            return (wav_path.to_path_buf(), AudioFormat::Wav);
        }

        let mp3_path = workdir.join("speech.mp3");
        match self.transcoder.transcode(wav_path, &mp3_path).await {
            Ok(()) => (mp3_path, AudioFormat::Mp3),
            Err(error) => {
                tracing::warn!(%error, "Transcode failed, serving uncompressed audio");
                (wav_path.to_path_buf(), AudioFormat::Wav)
            }
        }
    }

    /// Best-effort side write of the artifact bytes into the store. Failure
    /// is logged and leaves the in-memory artifact untouched.
    async fn persist(&self, artifact: &AudioArtifact) -> Option<String> {
        let path = format!(
            "audio/{}-{}.{}",
            Utc::now().format("%Y%m%d%H%M%S"),
            &Uuid::new_v4().to_string()[..8],
            artifact.format.extension()
        );

        match self.store.put(&path, artifact.bytes.clone()).await {
            Ok(()) => Some(path),
            Err(error) => {
                tracing::warn!(%error, path, "Could not persist audio artifact");
                None
            }
        }
    }
}

fn estimate_duration_seconds(speech_text: &str) -> f32 {
    let words = speech_text.split_whitespace().count() as f32;
    (words / WORDS_PER_SPOKEN_MINUTE) * 60.0
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::{
        ArtifactStoreError, EngineError, SpeechError, TranscodeError,
    };

    struct MockSynthesizer {
        id: String,
        outcome: Result<Vec<u8>, ()>,
    }

    #[async_trait]
    impl SpeechSynthesizer for MockSynthesizer {
        fn id(&self) -> &str {
            &self.id
        }

        fn output_format(&self, params: &VoiceParams) -> AudioFormat {
            params.format
        }

        async fn synthesize(
            &self,
            _text: &str,
            _params: &VoiceParams,
        ) -> Result<Vec<u8>, SpeechError> {
            match &self.outcome {
                Ok(bytes) => Ok(bytes.clone()),
                Err(()) => Err(SpeechError::RequestFailed("simulated".to_string())),
            }
        }
    }

    struct FailingEngine;

    #[async_trait]
    impl LocalSpeechEngine for FailingEngine {
        async fn render(&self, _text: &str, _output: &Path) -> Result<(), EngineError> {
            Err(EngineError::NotAvailable("no engine".to_string()))
        }
    }

    struct WritingEngine;

    #[async_trait]
    impl LocalSpeechEngine for WritingEngine {
        async fn render(&self, _text: &str, output: &Path) -> Result<(), EngineError> {
            tokio::fs::write(output, placeholder_wav()).await?;
            Ok(())
        }
    }

    struct UnavailableTranscoder;

    #[async_trait]
    impl Transcoder for UnavailableTranscoder {
        fn is_available(&self) -> bool {
            false
        }

        async fn transcode(&self, _input: &Path, _output: &Path) -> Result<(), TranscodeError> {
            Err(TranscodeError::ToolNotFound)
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        paths: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ArtifactStore for RecordingStore {
        async fn put(&self, path: &str, _bytes: Vec<u8>) -> Result<(), ArtifactStoreError> {
            self.paths.lock().unwrap().push(path.to_string());
            Ok(())
        }

        async fn fetch(&self, path: &str) -> Result<Vec<u8>, ArtifactStoreError> {
            Err(ArtifactStoreError::NotFound(path.to_string()))
        }
    }

    struct RejectingStore;

    #[async_trait]
    impl ArtifactStore for RejectingStore {
        async fn put(&self, _path: &str, _bytes: Vec<u8>) -> Result<(), ArtifactStoreError> {
            Err(ArtifactStoreError::WriteFailed("disk full".to_string()))
        }

        async fn fetch(&self, path: &str) -> Result<Vec<u8>, ArtifactStoreError> {
            Err(ArtifactStoreError::NotFound(path.to_string()))
        }
    }

    fn service_with(
        synthesizers: Vec<Arc<dyn SpeechSynthesizer>>,
        engine: Arc<dyn LocalSpeechEngine>,
        store: Arc<dyn ArtifactStore>,
    ) -> AudioService {
        AudioService::new(synthesizers, engine, Arc::new(UnavailableTranscoder), store)
    }

    #[tokio::test]
    async fn given_working_remote_provider_when_synthesizing_then_remote_bytes_returned() {
        let service = service_with(
            vec![Arc::new(MockSynthesizer {
                id: "openai".to_string(),
                outcome: Ok(vec![9, 9, 9]),
            })],
            Arc::new(FailingEngine),
            Arc::new(RecordingStore::default()),
        );

        let artifact = service.synthesize("Hello world.", &VoiceParams::default()).await;
        assert_eq!(artifact.source, AudioSource::RemoteTts);
        assert_eq!(artifact.bytes, vec![9, 9, 9]);
        assert_eq!(artifact.format, AudioFormat::Mp3);
        assert!(artifact.stored_path.is_some());
    }

    #[tokio::test]
    async fn given_remote_failures_when_local_engine_works_then_wav_served_without_codec() {
        let service = service_with(
            vec![Arc::new(MockSynthesizer {
                id: "openai".to_string(),
                outcome: Err(()),
            })],
            Arc::new(WritingEngine),
            Arc::new(RecordingStore::default()),
        );

        let artifact = service.synthesize("Hello world.", &VoiceParams::default()).await;
        assert_eq!(artifact.source, AudioSource::LocalEngine);
        assert_eq!(artifact.format, AudioFormat::Wav);
        assert!(!artifact.bytes.is_empty());
    }

    #[tokio::test]
    async fn given_every_tier_failing_when_synthesizing_then_placeholder_served() {
        let service = service_with(
            Vec::new(),
            Arc::new(FailingEngine),
            Arc::new(RecordingStore::default()),
        );

        let artifact = service.synthesize("Hello world.", &VoiceParams::default()).await;
        assert_eq!(artifact.source, AudioSource::Placeholder);
        assert_eq!(artifact.format, AudioFormat::Wav);
        assert!(!artifact.bytes.is_empty());
    }

    #[tokio::test]
    async fn given_store_failure_when_synthesizing_then_artifact_still_returned() {
        let service = service_with(
            Vec::new(),
            Arc::new(FailingEngine),
            Arc::new(RejectingStore),
        );

        let artifact = service.synthesize("Hello world.", &VoiceParams::default()).await;
        assert!(!artifact.bytes.is_empty());
        assert!(artifact.stored_path.is_none());
    }

    #[tokio::test]
    async fn given_empty_remote_payload_when_synthesizing_then_tier_is_skipped() {
        let service = service_with(
            vec![Arc::new(MockSynthesizer {
                id: "openai".to_string(),
                outcome: Ok(Vec::new()),
            })],
            Arc::new(FailingEngine),
            Arc::new(RecordingStore::default()),
        );

        let artifact = service.synthesize("Hello world.", &VoiceParams::default()).await;
        assert_eq!(artifact.source, AudioSource::Placeholder);
    }
}
