use nodejoin_config::constants::{DEFAULT_LOG_FILTER, NODEJOIN_LOG, RUST_LOG};
use tracing_subscriber::EnvFilter;

/// Filter from `NODEJOIN_LOG`, then `RUST_LOG`, then the default
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(NODEJOIN_LOG)
        .or_else(|_| EnvFilter::try_from_env(RUST_LOG))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// command output.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
