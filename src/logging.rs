//! Logging init: diagnostics go to stderr so stdout only carries the report.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Quiet (warnings only) unless RUST_LOG says otherwise,
/// e.g. `RUST_LOG=linkprobe=debug` to see every probe outcome.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second call (tests) must not panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
