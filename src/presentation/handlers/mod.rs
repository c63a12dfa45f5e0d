mod audio;
mod fetch;
mod generate;
mod health;
mod providers;
pub mod types;

pub use audio::generate_audio_handler;
pub use fetch::fetch_tutorial_handler;
pub use generate::generate_tutorial_handler;
pub use health::health_handler;
pub use providers::providers_handler;
