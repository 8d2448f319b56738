//! Tracing subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable overriding the configured filter.
pub const LOG_ENV_VAR: &str = "MINER_LOG";

/// Build the filter: `MINER_LOG` wins, then the configured level.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.effective_level()))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let filter = build_filter(config);
    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.effective_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    if result.is_err() {
        ::tracing::debug!("tracing subscriber already installed");
    }
}
