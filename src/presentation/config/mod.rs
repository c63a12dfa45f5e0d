mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, DatabaseSettings, ProviderFamily, ServerSettings, Settings,
    SpeechProviderSettings, StorageSettings, TextProviderSettings,
};
