//! Tracing/logging initialization.
//!
//! The binaries here are interactive console tools, so output is compact
//! human-readable lines rather than structured JSON.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process at the default `info` level.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default("info");
}

/// Like [`init`], with `directives` as the filter when `RUST_LOG` is unset.
///
/// `RUST_LOG`, when present, always wins.
pub fn init_with_default(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    // Compact console lines; verbosity configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .without_time()
        .with_target(false)
        .try_init();
}
