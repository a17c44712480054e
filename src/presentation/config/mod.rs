mod environment;
mod scaffold_config;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    API_KEY_VAR, ENV_PREFIX, GeminiSettings, LoggingSettings, ServerSettings, SessionSettings,
    Settings, UploadSettings,
};
