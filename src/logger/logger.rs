//! Logging setup for the command line entry point.
//!
//! Log output goes to stderr so that stdout only carries history values. The
//! level comes from `RUST_LOG` (for example `RUST_LOG=histkeep=debug`) and
//! defaults to `warn`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Calling it again is harmless.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialized");
    }
}
