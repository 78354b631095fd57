//! Tracing subscriber installation.
//!
//! The library only emits `tracing` events; binaries and tests opt in to
//! output by calling [`init`] once at startup.

use tracing_subscriber::EnvFilter;

use crate::config::Configuration;

/// Errors that can occur when installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Returns the default filter directive for `config`.
///
/// Verbose configurations log at `debug`, others at `info`.
#[must_use]
pub const fn default_directive(config: &Configuration) -> &'static str {
    if config.verbose_logging() {
        "debug"
    } else {
        "info"
    }
}

/// Installs a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence when set; otherwise the level follows
/// [`default_directive`].
///
/// # Errors
///
/// Returns [`LoggingError::Filter`] if the directive is invalid and
/// [`LoggingError::Install`] if a global subscriber is already set.
pub fn init(config: &Configuration) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(config))
            .map_err(|error| LoggingError::Filter(error.to_string()))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| LoggingError::Install(error.to_string()))
}
