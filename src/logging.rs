//! Logging initialisation for the CLI
//!
//! Events go to stderr, filtered by `RUST_LOG` (default `warn`), so they never
//! mix with the HTML or JSON written to stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber. Call once from `main`.
pub fn init(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
