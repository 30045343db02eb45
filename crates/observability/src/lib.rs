//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize with a fallback filter used when `RUST_LOG` is unset.
pub fn init_with_default(directives: &str) {
    tracing::init_with_default(directives);
}

/// Tracing configuration (filters, format).
pub mod tracing;
