//! Logging setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set, else `debug` with `--debug` and `warn` without
pub fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }))
}

/// Install the stderr subscriber
pub fn init_tracing(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .init();
}
