//! Errors surfaced by the command-line adapter.

use thiserror::Error;

use super::config::ConfigError;
use crate::logging::LoggingError;
use crate::task::services::TaskLifecycleError;

/// Exit code for input the user can correct.
pub const EXIT_USER_ERROR: u8 = 1;

/// Exit code for storage, format, configuration and logging failures.
pub const EXIT_ENVIRONMENT_ERROR: u8 = 3;

/// Errors returned while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A task operation failed.
    #[error(transparent)]
    Task(#[from] TaskLifecycleError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Diagnostic logging could not be set up.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// Command output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Returns `true` when the error stems from user input rather than the
    /// environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::Task(err) => err.is_user_error(),
            Self::Config(_) | Self::Logging(_) | Self::Output(_) => false,
        }
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_user_error() {
            EXIT_USER_ERROR
        } else {
            EXIT_ENVIRONMENT_ERROR
        }
    }
}
