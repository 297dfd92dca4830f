//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `LONGPEP_LOG=longpep=trace`.
pub const LOG_ENV: &str = "LONGPEP_LOG";

static INIT: Once = Once::new();

/// Returns the filter used when `LONGPEP_LOG` is unset or invalid.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "longpep=debug"
    } else {
        "longpep=warn"
    }
}

/// Installs a stderr subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
