use std::sync::Arc;

use crate::application::ports::TutorialRepository;
use crate::application::services::{AudioService, GenerationService};

/// Shared handler state. Services own their provider chains internally, so
/// the state is a flat set of `Arc`s with no generic parameters.
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub audio_service: Arc<AudioService>,
    pub tutorial_repository: Arc<dyn TutorialRepository>,
    /// Whether the local speech engine binary was found at startup.
    pub speech_engine_available: bool,
    /// Whether the audio codec tool was found at startup.
    pub codec_available: bool,
}
