//! Logging setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! caller's choice. `CONJUGATION_LOG` takes precedence over `-v` flags and
//! accepts any `EnvFilter` directive (`debug`, `conjugation=trace`, ...).
//!
//! ```ignore
//! use conjugation::observability::init_logging;
//!
//! fn main() {
//!     init_logging(cli.verbosity);
//!     // ... rest of application
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV_VAR: &str = "CONJUGATION_LOG";

/// Map `-v` repetitions to a level directive.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr `fmt` subscriber. Later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
