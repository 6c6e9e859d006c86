//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only results. `RUST_LOG` overrides
//! the level derived from `-q` / `-v`.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Filter for a verbosity level, unless `RUST_LOG` is set
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Install the global subscriber; later calls are ignored
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .try_init();
}
