//! Tracing subscriber initialization.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber from configuration.
///
/// Honors `RUST_LOG` when set, falling back to the configured log level.
/// Emits JSON when `log_format` is `json`, human-readable text otherwise.
///
/// Calling this more than once per process has no effect beyond the first
/// call returning an initialized subscriber.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
