//! Diagnostics for the demo binaries.
//!
//! The library only emits `tracing` events. Binaries call [`init`] once to
//! route them to stderr, so stdout carries nothing but demo output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "warn";

/// Installs a global subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`]. Later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
