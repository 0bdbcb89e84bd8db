// ABOUTME: Tracing subscriber setup for the CLI
// ABOUTME: Filter comes from RUST_LOG with an info-level default

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Reads the filter from `RUST_LOG`; defaults to `info` when unset or
/// malformed. Diagnostics go to stderr so summary lines on stdout stay
/// machine-readable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
