//! Diagnostic log setup
//!
//! Log lines go to stderr so that frames printed on stdout stay clean. The
//! filter comes from `MAZEVIEW_LOG` in `EnvFilter` syntax and otherwise
//! defaults to `info`, or `error` when quiet.

use crate::io::configuration::LOG_ENV;
use tracing_subscriber::EnvFilter;

/// Filter directive used when the environment does not set one
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "error" } else { "info" }
}

/// Build the filter from `MAZEVIEW_LOG`, falling back to the default
///
/// An unparsable variable falls back as well.
pub fn filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)))
}

/// Install the global subscriber
///
/// Returns false if one was already installed, which happens when several
/// tests share a process.
pub fn init(quiet: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
