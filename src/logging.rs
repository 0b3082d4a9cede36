//! Diagnostic logging for the CLI.
//!
//! Events go to stderr so plan output on stdout stays clean. `RUST_LOG`
//! overrides the verbosity-derived filter when set.

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = env::var("RUST_LOG")
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging(0);
        init_logging(2);
    }
}
