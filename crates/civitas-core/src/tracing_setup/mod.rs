//! Tracing initialization and span helpers.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::CivitasConfig;

static INIT: Once = Once::new();

/// Resolve the subscriber filter.
///
/// Precedence: `filter` argument, then `RUST_LOG`, then `info`. An invalid
/// directive falls back to `info`.
pub fn build_filter(filter: Option<&str>) -> EnvFilter {
    let parsed = match filter {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    };
    parsed.unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install a global fmt subscriber.
///
/// Safe to call more than once; only the first call has any effect, and a
/// subscriber installed elsewhere is left alone.
pub fn init_tracing(filter: Option<&str>) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(build_filter(filter))
            .with_target(true)
            .try_init();
    });
}

/// Install the subscriber using the `[logging]` section of `config`.
pub fn init_from_config(config: &CivitasConfig) {
    init_tracing(Some(config.logging.effective_filter()));
}
