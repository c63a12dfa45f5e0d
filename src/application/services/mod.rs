mod audio_service;
mod generation_service;
mod local_template;
mod prompt_builder;

pub use audio_service::AudioService;
pub use generation_service::GenerationService;
pub use local_template::render_local_tutorial;
pub use prompt_builder::build_prompt;
