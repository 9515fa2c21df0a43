//! Task entity and its status.

use super::{ParseTaskStatusError, TaskDescription, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task status marker.
///
/// Status is a free-form marker rather than a guarded workflow: every
/// status is reachable from every other through the entity's operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Todo,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    /// Parses the canonical representation exactly; no case folding or
    /// trimming is applied.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single unit of tracked work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Unchecked shape of a persisted task, validated on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    description: TaskDescription,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = String;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        if record.updated_at < record.created_at {
            return Err(format!(
                "task {} was updated at {} before it was created at {}",
                record.id, record.updated_at, record.created_at
            ));
        }
        Ok(Self {
            id: record.id,
            description: record.description,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl Task {
    /// Creates a new `todo` task with both timestamps set to the clock's
    /// current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] when the description is
    /// empty after trimming.
    pub fn new(
        id: TaskId,
        description: impl AsRef<str>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let description = TaskDescription::new(description)?;
        let timestamp = clock.utc();

        Ok(Self {
            id,
            description,
            status: TaskStatus::Todo,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the trimmed task description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest successful mutation.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] when the new description
    /// is empty after trimming. The task is left untouched in that case.
    pub fn update_description(
        &mut self,
        description: impl AsRef<str>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.description = TaskDescription::new(description)?;
        self.touch(clock);
        Ok(())
    }

    /// Marks the task as in progress, whatever its current status.
    pub fn mark_in_progress(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::InProgress;
        self.touch(clock);
    }

    /// Marks the task as done, whatever its current status.
    pub fn mark_done(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Done;
        self.touch(clock);
    }

    /// Refreshes `updated_at`, never letting it fall behind `created_at`.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.created_at);
    }
}
