//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Plangate tracing/logging system.
///
/// Reads the `PLANGATE_LOG` environment variable for per-gate log levels.
/// Format: `PLANGATE_LOG=time=debug,safety=info,pipeline=warn`
///
/// Falls back to `plangate=info` if `PLANGATE_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PLANGATE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("plangate=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
