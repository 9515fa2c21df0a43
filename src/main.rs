//! `task-cli`: manage a task list stored in a JSON file.
//!
//! ```text
//! task-cli add "Buy milk"
//! task-cli mark-in-progress 1
//! task-cli list todo
//! ```

use std::process::ExitCode;

use clap::Parser;
use task_tracker::cli::{self, Cli, CliError, EXIT_ENVIRONMENT_ERROR, Settings};
use task_tracker::logging;

fn main() -> ExitCode {
    let args = Cli::parse();

    let settings = match Settings::load(&args.global) {
        Ok(settings) => settings,
        Err(err) => return fail(&CliError::from(err)),
    };

    if let Err(err) = logging::init(&settings.log_level) {
        return fail(&CliError::from(err));
    }

    tracing::debug!(file = %settings.tasks_file, "resolved task file");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli::execute(&args.command, &settings, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            drop(out);
            fail(&err)
        }
    }
}

/// Reports `err` and converts it to an exit code. User errors are printed
/// to stdout alongside normal output; environment failures go to stderr.
fn fail(err: &CliError) -> ExitCode {
    let written = if err.is_user_error() {
        cli::report_error(err, &mut std::io::stdout().lock())
    } else {
        tracing::error!(error = %err, "command failed");
        cli::report_error(err, &mut std::io::stderr().lock())
    };
    if written.is_err() {
        return ExitCode::from(EXIT_ENVIRONMENT_ERROR);
    }
    ExitCode::from(err.exit_code())
}
