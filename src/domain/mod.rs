mod audio_artifact;
mod expertise;
mod tutorial;
mod tutorial_request;
mod voice_params;

pub use audio_artifact::{AudioArtifact, AudioFormat, AudioSource};
pub use expertise::Expertise;
pub use tutorial::{ContentMetrics, ContentSource, Tutorial, TutorialId};
pub use tutorial_request::{RequestValidationError, TutorialRequest};
pub use voice_params::VoiceParams;
