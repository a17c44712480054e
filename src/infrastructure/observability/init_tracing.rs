use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Installs the global subscriber; plain text by default, JSON lines on request.
///
/// Fails if a subscriber is already installed, which only happens when
/// called twice in one process.
pub fn init_tracing(config: TracingConfig, port: u16) -> Result<(), TryInitError> {
    let (env_filter, filter_source) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, "RUST_LOG"),
        Err(_) => (EnvFilter::new(&config.default_filter), "settings"),
    };

    let json_layer = config.json_format.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });
    let text_layer = (!config.json_format).then(|| {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    tracing::info!(
        port = port,
        environment = %config.environment,
        json_format = config.json_format,
        filter_source,
        "Tutor server initialized"
    );
    Ok(())
}
