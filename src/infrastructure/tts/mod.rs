mod espeak_engine;
mod ffmpeg_transcoder;
mod generic_speech;
mod openai_speech;
mod placeholder;
mod tool_locator;

pub use espeak_engine::EspeakEngine;
pub use ffmpeg_transcoder::FfmpegTranscoder;
pub use generic_speech::GenericSpeechClient;
pub use openai_speech::OpenAiSpeechClient;
pub use placeholder::{PLACEHOLDER_SECONDS, placeholder_wav};
pub use tool_locator::SystemToolLocator;
