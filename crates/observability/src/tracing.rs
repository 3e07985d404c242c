//! Tracing/logging initialization.
//!
//! Library crates only emit `tracing` events; hosts (and test harnesses)
//! decide how they are rendered by calling one of the initializers here.

use tracing_subscriber::EnvFilter;

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize JSON logging for a host process.
///
/// Defaults to `info`, overridable via `RUST_LOG`. Safe to call multiple
/// times (subsequent calls are no-ops).
pub fn init() {
    init_with("info");
}

/// Initialize JSON logging with an explicit default filter directive.
pub fn init_with(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Compact human-readable logging for tests. No-op after the first call, so
/// every test can invoke it unconditionally.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .compact()
        .with_target(false)
        .try_init();
}
