use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_TUTOR_NAME;
use crate::domain::DEFAULT_QUESTION_LIMIT;
use crate::infrastructure::gemini::{DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const ENV_PREFIX: &str = "APP";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub session: SessionSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub poll_interval_ms: u64,
}

impl GeminiSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub question_limit: u32,
    pub max_sessions: usize,
    pub tutor_name: String,
    pub idle_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

impl SessionSettings {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults,
    /// `appsettings.{env}.toml`, `APP__*` variables, then `GEMINI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("gemini.base_url", DEFAULT_BASE_URL)?
            .set_default("gemini.chat_model", DEFAULT_CHAT_MODEL)?
            .set_default("gemini.poll_interval_ms", 5000)?
            .set_default("session.question_limit", i64::from(DEFAULT_QUESTION_LIMIT))?
            .set_default("session.max_sessions", 1000)?
            .set_default("session.tutor_name", DEFAULT_TUTOR_NAME)?
            .set_default("session.idle_ttl_secs", 3600)?
            .set_default("session.sweep_interval_secs", 60)?
            .set_default("upload.max_file_size_mb", 20)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", environment == Environment::Prod)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("gemini.api_key", std::env::var(API_KEY_VAR).ok())?
            .build()?
            .try_deserialize()
    }
}
