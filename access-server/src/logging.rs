//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG`, falling back to `default_filter`.
/// Logging to stderr keeps stdout free for the batch join's JSON output.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
