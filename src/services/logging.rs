use crate::domain::constants::DEFAULT_LOG_FILTER;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout is reserved for command output.
pub fn init_tracing() {
    // RUST_LOG=linesnip=debug
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}
