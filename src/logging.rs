//! Diagnostic logging
//!
//! Sets up a `tracing` subscriber writing to stderr, so piped results and the
//! terminal UI on stdout stay clean.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `warn`, or at
/// `debug` when `verbose` is set. Safe to call multiple times - only the
/// first call has effect.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("wordle_helper={default_level}")));

        // A subscriber may already be installed by an embedding application
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}
