//! Diagnostic logging for the `task-cli` binary.
//!
//! Diagnostics go to stderr so that stdout carries only command output.
//! `RUST_LOG` takes precedence over the configured level.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log level '{directive}': {source}")]
    InvalidFilter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser error.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Builds a filter from a configured directive such as `warn` or
/// `task_tracker=debug`.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidFilter`] when `directive` does not parse.
pub fn filter_for(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidFilter {
        directive: directive.to_owned(),
        source,
    })
}

/// Installs the global stderr subscriber.
///
/// `level` is used only when `RUST_LOG` is unset or unparsable.
///
/// # Errors
///
/// Returns [`LoggingError`] when `level` is invalid or a subscriber is
/// already installed.
pub fn init(level: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_for(level)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}
