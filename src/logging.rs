//! Diagnostic logging setup
//!
//! Results meant for the user go to stdout; diagnostics are `tracing`
//! events written to stderr. The filter comes from `GAMESHELL_LOG`
//! (same syntax as `RUST_LOG`), otherwise `warn`, or `debug` for this
//! crate when `--verbose` is given.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "GAMESHELL_LOG";

/// Default filter directive
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,gameshell=debug" } else { "warn" }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
