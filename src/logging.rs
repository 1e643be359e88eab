//! Diagnostics setup.

use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_ENV: &str = "ALGOFORGE_LOG";

/// Install the stderr `tracing` subscriber. Call once, from the binary.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
