//! Service layer implementing each task use case as a load-mutate-save
//! cycle over the repository.

use crate::task::{
    domain::{Task, TaskDescription, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// No task carries the requested identifier.
    #[error("Task not found")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns `true` for errors the user can correct by changing their
    /// input, as opposed to storage or format failures.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::NotFound(_))
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Holds no task state between calls: every operation loads the full
/// collection, applies one entity operation and saves the full collection.
/// Nothing is saved when an operation fails.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task with the next free identifier and appends it to the
    /// collection.
    ///
    /// The description is validated before storage is consulted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for an empty description and
    /// [`TaskLifecycleError::Repository`] when loading or saving fails.
    pub fn add_task(&self, description: &str) -> TaskLifecycleResult<Task> {
        let description = TaskDescription::new(description)?;
        let id = self.repository.next_id()?;
        let task = Task::new(id, description, &*self.clock)?;

        let mut tasks = self.repository.load()?;
        tasks.push(task.clone());
        self.repository.save(&tasks)?;

        info!(task_id = %task.id(), "task added");
        Ok(task)
    }

    /// Replaces the description of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has `id`,
    /// [`TaskLifecycleError::Domain`] for an empty description and
    /// [`TaskLifecycleError::Repository`] when loading or saving fails.
    pub fn update_task(&self, id: TaskId, description: &str) -> TaskLifecycleResult<Task> {
        self.modify_task(id, |task, clock| task.update_description(description, clock))
    }

    /// Removes the task with `id` from the collection and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has `id` and
    /// [`TaskLifecycleError::Repository`] when loading or saving fails.
    pub fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut tasks = self.repository.load()?;
        let index = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| not_found(id))?;
        let removed = tasks.remove(index);
        self.repository.save(&tasks)?;

        info!(task_id = %id, "task deleted");
        Ok(removed)
    }

    /// Marks the task with `id` as in progress, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has `id` and
    /// [`TaskLifecycleError::Repository`] when loading or saving fails.
    pub fn mark_task_in_progress(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.modify_task(id, |task, clock| {
            task.mark_in_progress(clock);
            Ok(())
        })
    }

    /// Marks the task with `id` as done, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has `id` and
    /// [`TaskLifecycleError::Repository`] when loading or saving fails.
    pub fn mark_task_done(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.modify_task(id, |task, clock| {
            task.mark_done(clock);
            Ok(())
        })
    }

    /// Lists tasks in stored order.
    ///
    /// An empty `status` returns every task. Otherwise only tasks whose
    /// status string equals `status` exactly are returned, so an
    /// unrecognised value yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when loading fails.
    pub fn list_tasks(&self, status: &str) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.load()?;
        if status.is_empty() {
            return Ok(tasks);
        }

        let matching: Vec<Task> = tasks
            .into_iter()
            .filter(|task| task.status().as_str() == status)
            .collect();
        debug!(status, count = matching.len(), "filtered tasks");
        Ok(matching)
    }

    /// Loads the collection, applies `apply` to the task with `id` and saves.
    fn modify_task<F>(&self, id: TaskId, apply: F) -> TaskLifecycleResult<Task>
    where
        F: FnOnce(&mut Task, &C) -> Result<(), TaskDomainError>,
    {
        let mut tasks = self.repository.load()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| not_found(id))?;
        apply(task, &*self.clock)?;
        let updated = task.clone();
        self.repository.save(&tasks)?;

        info!(task_id = %id, status = %updated.status(), "task updated");
        Ok(updated)
    }
}

fn not_found(id: TaskId) -> TaskLifecycleError {
    warn!(task_id = %id, "task not found");
    TaskLifecycleError::NotFound(id)
}
