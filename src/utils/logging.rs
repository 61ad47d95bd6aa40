//! Structured logging setup.
//!
//! The library itself only emits `tracing` events. Binaries call
//! [`init_logging`] once at startup to route them to stderr.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber configured from `config`.
///
/// `RUST_LOG` takes precedence over `config.log_level` when set. Returns
/// `false` if a global subscriber was already installed, in which case the
/// existing one is left in place.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if config.json_format {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    }
    installed
}

fn default_directive(config: &LoggingConfig) -> String {
    config.log_level.as_str().to_ascii_lowercase()
}
