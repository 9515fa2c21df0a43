//! Command-line argument model for `task-cli`.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::task::domain::TaskStatus;

/// Task Tracker CLI.
#[derive(Parser, Debug)]
#[command(name = "task-cli", version, about = "Track tasks in a JSON file")]
pub struct Cli {
    /// Options shared by every command.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Path of the JSON task file (default: `tasks.json`).
    #[arg(short, long, global = true, env = "TASK_CLI_FILE")]
    pub file: Option<Utf8PathBuf>,

    /// Path to config file (default: `<config dir>/task-cli/config.toml`).
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Log filter (trace, debug, info, warn, error) used when `RUST_LOG` is
    /// unset.
    #[arg(long, global = true, env = "TASK_CLI_LOG")]
    pub log_level: Option<String>,
}

/// Task tracker commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new task.
    Add {
        /// Task description.
        description: String,
    },
    /// Replace the description of a task.
    Update {
        /// Task ID.
        id: u64,
        /// New description.
        description: String,
    },
    /// Delete a task.
    Delete {
        /// Task ID.
        id: u64,
    },
    /// Mark a task as in progress.
    MarkInProgress {
        /// Task ID.
        id: u64,
    },
    /// Mark a task as done.
    MarkDone {
        /// Task ID.
        id: u64,
    },
    /// List tasks, optionally only those with the given status.
    List {
        /// Status to filter by.
        status: Option<StatusArg>,
    },
}

/// Status values accepted by `list`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    /// Tasks not yet started.
    Todo,
    /// Tasks under way.
    InProgress,
    /// Finished tasks.
    Done,
}

impl From<StatusArg> for TaskStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Todo => Self::Todo,
            StatusArg::InProgress => Self::InProgress,
            StatusArg::Done => Self::Done,
        }
    }
}
