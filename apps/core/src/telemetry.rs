//! Telemetry setup.
//!
//! Builds the tracing subscriber stack: env-filtered, bunyan-formatted JSON
//! events on stderr so stdout stays clean for the rendered brief.

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Initialize the global subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset. Later calls are
/// no-ops; tests may initialize more than once.
pub fn init(name: &str, default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = BunyanFormattingLayer::new(name.to_string(), std::io::stderr);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    let _ = set_global_default(subscriber);
}
