use std::io;

use tracing_subscriber::fmt::format::Format;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter::EnvFilter, Layer, Registry};

use crate::util::config::{LogFormat, LoggingConfig};
use crate::util::logging::standards::events;

const FALLBACK_FILTER: &str = "warn";

/// Installs the stderr subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn log_init(config: &LoggingConfig) {
    let filter = build_env_filter(&config.filter);

    let installed = match config.format {
        LogFormat::Json => {
            let stderr_layer = layer()
                .json()
                .with_target(false)
                .with_ansi(false)
                .with_writer(io::stderr)
                .with_filter(filter);
            Registry::default().with(stderr_layer).try_init()
        }
        LogFormat::Text => {
            let console_format = Format::default()
                .without_time()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false);
            let stderr_layer = layer()
                .event_format(console_format)
                .with_writer(io::stderr)
                .with_filter(filter);
            Registry::default().with(stderr_layer).try_init()
        }
    };

    if installed.is_ok() {
        tracing::debug!(
            event = events::LOG_INIT,
            filter = %config.filter,
            structured = config.format == LogFormat::Json
        );
    }
}

pub fn build_env_filter(expression: &str) -> EnvFilter {
    EnvFilter::try_new(expression).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_falls_back() {
        assert!(EnvFilter::try_new("mkversion=notalevel").is_err());
        let filter = build_env_filter("mkversion=notalevel");
        assert!(filter.to_string().contains(FALLBACK_FILTER));
    }

    #[test]
    fn init_twice_is_harmless() {
        let config = LoggingConfig::default();
        log_init(&config);
        log_init(&config);
    }
}
