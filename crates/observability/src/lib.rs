//! Shared tracing/logging setup for yadak binaries.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// Emits JSON lines, filtered through `RUST_LOG` with an `info` default.
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
