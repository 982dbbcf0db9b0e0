//! Logging initialisation for the command-line entry point

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor the configuration sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter: `RUST_LOG` first, then the configured level, then `warn`
pub fn env_filter(configured_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_level.unwrap_or(DEFAULT_LOG_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber writing to stderr
///
/// Stdout carries the rendered response only. Calling this twice is
/// harmless: the second installation is ignored.
pub fn init_logging(configured_level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(configured_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
