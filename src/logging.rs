//! Logging configuration for the routes CLI

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::AppConfig;
use crate::Result;

/// Initialize logging from configuration.
///
/// The `RUST_LOG` environment variable takes precedence over the
/// configured level.
pub fn init_logging_with_config(config: &AppConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| filter_for_level(config.log_level()));

    init_with_filter(env_filter)
}

/// Initialize logging with a custom log level
pub fn init_logging_with_level(level: &str) -> Result<()> {
    init_with_filter(filter_for_level(level))
}

fn filter_for_level(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},routes={level}"))
}

fn init_with_filter(env_filter: EnvFilter) -> Result<()> {
    // Logs go to stderr; stdout is reserved for command output
    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .init();

    Ok(())
}
