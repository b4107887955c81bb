//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the banner and the diff.
//! `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug`
//! with `--verbose`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "worlds_patcher=debug"
    } else {
        "warn"
    }
}

/// Build the env filter from `RUST_LOG`, falling back to [`default_directive`].
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. A second call is ignored.
pub fn init(verbose: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter(verbose))
        .try_init();
}
