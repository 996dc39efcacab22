//! Tracing setup for the `drugai` binary.
//!
//! Calculator results are written to stdout, often to be piped as JSON or
//! CSV, so log records always go to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when neither `RUST_LOG` nor the config file says otherwise
pub const DEFAULT_LEVEL: &str = "warn";

/// Level used by `--verbose`; shows every rejected input and rebuilt table
pub const VERBOSE_LEVEL: &str = "debug";

/// Pick the filter level from the `--verbose` flag and the configured level
pub fn level_for(verbose: bool, configured: &str) -> &str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        configured
    }
}

/// Install the stderr subscriber at [`DEFAULT_LEVEL`]
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Install the stderr subscriber, filtering at `default_level`
///
/// `RUST_LOG` still wins when set. A second call is ignored, since a
/// subscriber can only be installed once per process.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

/// Route calculator debug logs into the test harness output
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new(VERBOSE_LEVEL))
        .try_init();
}
