//! Logging initialization through tracing-subscriber

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging configuration for the process
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level when RUST_LOG is not set
    pub level: Level,
    /// Include the emitting module in each line
    pub with_target: bool,
    /// Colored output
    pub color_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: false,
            color_output: true,
        }
    }
}

impl LoggingConfig {
    /// Errors only; used while the terminal is owned by the TUI
    pub fn quiet() -> Self {
        Self {
            level: Level::ERROR,
            ..Self::default()
        }
    }
}

/// Install the global subscriber. RUST_LOG overrides the configured level.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.with_target)
        .with_ansi(config.color_output)
        .try_init()
        .map_err(|error| anyhow::anyhow!("Failed to install tracing subscriber: {error}"))
}
