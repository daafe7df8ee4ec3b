//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; applications that want them on
//! stderr call [`init`] once at startup. The filter comes from
//! `PGPDROP_LOG` (standard `EnvFilter` directives) and defaults to
//! `pgpdrop=warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::constants::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Build the filter from `PGPDROP_LOG`, falling back to the default.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a global subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init(format: LogFormat) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter());
    let result = match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    result.is_ok()
}
