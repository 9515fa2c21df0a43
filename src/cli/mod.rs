//! Command-line adapter over the task service.
//!
//! Parses arguments, resolves [`config::Settings`], wires the JSON file
//! repository into [`TaskLifecycleService`] and renders results. The core
//! task module knows nothing about this layer.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;

use std::io::Write;
use std::sync::Arc;

use chrono::Local;
use mockable::DefaultClock;

pub use args::{Cli, Command, GlobalArgs, StatusArg};
pub use commands::{dispatch, render_tasks};
pub use config::{ConfigError, Settings};
pub use error::{CliError, EXIT_ENVIRONMENT_ERROR, EXIT_USER_ERROR};

use crate::task::{
    adapters::file::JsonFileTaskRepository, services::TaskLifecycleService,
    services::TaskLifecycleError,
};

/// Runs `command` against the task file named in `settings`.
///
/// # Errors
///
/// Returns [`CliError`] when the task file cannot be opened, the operation
/// fails, or output cannot be written.
pub fn execute<W: Write>(
    command: &Command,
    settings: &Settings,
    out: &mut W,
) -> Result<(), CliError> {
    let repository = JsonFileTaskRepository::open(&settings.tasks_file)
        .map_err(|err| CliError::Task(TaskLifecycleError::Repository(err)))?;
    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    dispatch(&service, command, &Local, out)
}

/// Writes `err` the way the CLI reports failures: `Error: <message>`.
///
/// # Errors
///
/// Returns any error raised while writing to `out`.
pub fn report_error<W: Write>(err: &CliError, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Error: {err}")
}
