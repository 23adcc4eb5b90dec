// src/logging.rs
//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so `list`/`pick` output on stdout stays clean. `RUST_LOG`
//! overrides the level chosen from `-v` flags.

use tracing_subscriber::{EnvFilter, fmt};

/// Target name for filtering this crate's logs.
pub const TARGET: &str = "iconmap";

/// Default filter directive for a count of `-v` flags.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{TARGET}={}", level_for(verbosity))));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
