mod artifact_store;
mod local_speech_engine;
mod speech_synthesizer;
mod text_generator;
mod tool_locator;
mod transcoder;
mod tutorial_repository;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use local_speech_engine::{EngineError, LocalSpeechEngine};
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer};
pub use text_generator::{TextGenerator, TextGeneratorError};
pub use tool_locator::ToolLocator;
pub use transcoder::{TranscodeError, Transcoder};
pub use tutorial_repository::{RepositoryError, TutorialRepository};
