//! Tracing initialization for diagnostic logging

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `COBASKET_LOG=cobasket=debug`
pub const LOG_ENV_VAR: &str = "COBASKET_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber, writing to stderr.
///
/// Reads the filter from `COBASKET_LOG`, falling back to `cobasket=warn`
/// (or `cobasket=debug` when `verbose` is set). Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "cobasket=debug" } else { "cobasket=warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
