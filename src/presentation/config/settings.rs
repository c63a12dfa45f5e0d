use std::time::Duration;

use super::Environment;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MIN_REQUEST_INTERVAL_MS: u64 = 1000;
const DEFAULT_SPEAKING_RATE_WPM: u32 = 160;
const DEFAULT_AUDIO_BITRATE_KBPS: u32 = 128;
const DEFAULT_ARTIFACT_DIR: &str = "data/artifacts";

/// Wire shape a speech provider speaks, selected per provider in
/// configuration rather than inferred from model ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFamily {
    OpenAi,
    Generic,
}

impl TryFrom<&str> for ProviderFamily {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "generic" => Ok(Self::Generic),
            other => Err(format!(
                "Invalid provider family: {}. Expected: openai or generic",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextProviderSettings {
    pub id: String,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct SpeechProviderSettings {
    pub id: String,
    pub family: ProviderFamily,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AudioSettings {
    /// Words per minute passed to the local speech engine.
    pub speaking_rate_wpm: u32,
    pub bitrate_kbps: u32,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub artifact_dir: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// Postgres connection string. When absent the service boots with an
    /// in-memory repository.
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub text_providers: Vec<TextProviderSettings>,
    pub speech_providers: Vec<SpeechProviderSettings>,
    pub min_request_interval: Duration,
    pub audio: AudioSettings,
    pub storage: StorageSettings,
    pub database: DatabaseSettings,
}

impl Settings {
    /// Builds settings from the process environment, falling back to
    /// development defaults for anything unset.
    ///
    /// Provider lists come from `TEXT_PROVIDERS` / `SPEECH_PROVIDERS`
    /// (comma-separated ids, priority order); each id is then expanded via
    /// `{ID}_BASE_URL`, `{ID}_API_KEY`, `{ID}_MODEL`, and for speech
    /// providers `{ID}_FAMILY`.
    pub fn from_env() -> Self {
        let environment = std::env::var("APP_ENV")
            .ok()
            .and_then(|v| Environment::try_from(v).ok())
            .unwrap_or(Environment::Local);

        let server = ServerSettings {
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: env_parsed("SERVER_PORT", DEFAULT_PORT),
        };

        let text_providers = provider_ids("TEXT_PROVIDERS")
            .into_iter()
            .map(|id| {
                let prefix = env_prefix(&id);
                TextProviderSettings {
                    base_url: env_or(&format!("{prefix}_BASE_URL"), ""),
                    api_key: env_or(&format!("{prefix}_API_KEY"), ""),
                    model: env_or(&format!("{prefix}_MODEL"), ""),
                    id,
                }
            })
            .collect();

        let speech_providers = provider_ids("SPEECH_PROVIDERS")
            .into_iter()
            .map(|id| {
                let prefix = env_prefix(&id);
                SpeechProviderSettings {
                    family: std::env::var(format!("{prefix}_FAMILY"))
                        .ok()
                        .and_then(|v| ProviderFamily::try_from(v.as_str()).ok())
                        .unwrap_or(ProviderFamily::OpenAi),
                    base_url: env_or(&format!("{prefix}_BASE_URL"), ""),
                    api_key: env_or(&format!("{prefix}_API_KEY"), ""),
                    model: env_or(&format!("{prefix}_MODEL"), ""),
                    id,
                }
            })
            .collect();

        Self {
            environment,
            server,
            text_providers,
            speech_providers,
            min_request_interval: Duration::from_millis(env_parsed(
                "MIN_REQUEST_INTERVAL_MS",
                DEFAULT_MIN_REQUEST_INTERVAL_MS,
            )),
            audio: AudioSettings {
                speaking_rate_wpm: env_parsed("SPEAKING_RATE_WPM", DEFAULT_SPEAKING_RATE_WPM),
                bitrate_kbps: env_parsed("AUDIO_BITRATE_KBPS", DEFAULT_AUDIO_BITRATE_KBPS),
            },
            storage: StorageSettings {
                artifact_dir: env_or("ARTIFACT_DIR", DEFAULT_ARTIFACT_DIR),
            },
            database: DatabaseSettings {
                url: std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn provider_ids(key: &str) -> Vec<String> {
    std::env::var(key)
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn env_prefix(provider_id: &str) -> String {
    provider_id.to_uppercase().replace('-', "_")
}
