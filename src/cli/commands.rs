//! Command dispatch and user-facing rendering.

use std::io::Write;

use chrono::{DateTime, TimeZone, Utc};
use mockable::Clock;

use super::args::Command;
use super::error::CliError;
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::{TaskLifecycleError, TaskLifecycleService},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SEPARATOR: &str = "------";

/// Runs `command` against `service`, writing user-facing output to `out`.
///
/// Timestamps in listings are rendered in `tz`.
///
/// # Errors
///
/// Returns [`CliError::Task`] when the task operation fails and
/// [`CliError::Output`] when `out` cannot be written.
pub fn dispatch<R, C, Tz, W>(
    service: &TaskLifecycleService<R, C>,
    command: &Command,
    tz: &Tz,
    out: &mut W,
) -> Result<(), CliError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    W: Write,
{
    match command {
        Command::Add { description } => {
            let task = service.add_task(description)?;
            writeln!(out, "Task added successfully (ID: {})", task.id())?;
        }
        Command::Update { id, description } => {
            service.update_task(task_id(*id)?, description)?;
            writeln!(out, "Task updated successfully")?;
        }
        Command::Delete { id } => {
            service.delete_task(task_id(*id)?)?;
            writeln!(out, "Task deleted successfully")?;
        }
        Command::MarkInProgress { id } => {
            service.mark_task_in_progress(task_id(*id)?)?;
            writeln!(out, "Task marked as in progress")?;
        }
        Command::MarkDone { id } => {
            service.mark_task_done(task_id(*id)?)?;
            writeln!(out, "Task marked as done")?;
        }
        Command::List { status } => {
            let filter = status.map(TaskStatus::from);
            let tasks = service.list_tasks(filter.map_or("", TaskStatus::as_str))?;
            match (tasks.is_empty(), filter) {
                (true, None) => writeln!(out, "No tasks found")?,
                (true, Some(status)) => writeln!(out, "No tasks with status '{status}' found")?,
                (false, _) => render_tasks(&tasks, tz, out)?,
            }
        }
    }
    Ok(())
}

fn task_id(raw: u64) -> Result<TaskId, CliError> {
    TaskId::new(raw).map_err(|err| CliError::Task(TaskLifecycleError::Domain(err)))
}

/// Writes the task listing block, one entry per task.
///
/// # Errors
///
/// Returns any error raised while writing to `out`.
pub fn render_tasks<Tz, W>(tasks: &[Task], tz: &Tz, out: &mut W) -> std::io::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
    W: Write,
{
    writeln!(out, "Tasks:")?;
    writeln!(out, "{SEPARATOR}")?;
    for task in tasks {
        writeln!(
            out,
            "ID: {} | Status: {} | Description: {}",
            task.id(),
            task.status().as_str().to_uppercase(),
            task.description()
        )?;
        writeln!(
            out,
            "Created: {} | Updated: {}",
            format_timestamp(task.created_at(), tz),
            format_timestamp(task.updated_at(), tz)
        )?;
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

fn format_timestamp<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant
        .with_timezone(tz)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
