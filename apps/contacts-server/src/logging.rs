use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Picks the filter directive: `RUST_LOG` wins, then `-v` flags, then config.
fn build_filter(cfg: &LoggingConfig, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let directive = match verbose {
        0 => cfg.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{directive}' ({e}), falling back to 'info'");
        EnvFilter::new("info")
    })
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) {
    let filter = build_filter(cfg, verbose);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if cfg.json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}
