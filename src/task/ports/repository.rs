//! Repository port for whole-collection task persistence.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Repositories deal only in whole collections. Callers perform explicit
/// read-modify-write cycles; nothing here guards against two writers racing
/// between [`TaskRepository::load`] and [`TaskRepository::save`].
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// Replaces the entire persisted collection.
    ///
    /// Callers never observe a partially written collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when the medium cannot be
    /// written, or [`TaskRepositoryError::Format`] when the collection cannot
    /// be encoded.
    fn save(&self, tasks: &[Task]) -> TaskRepositoryResult<()>;

    /// Returns the full persisted collection in stored order.
    ///
    /// Returns an empty collection when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when the medium cannot be
    /// read, or [`TaskRepositoryError::Format`] when persisted data exists
    /// but is malformed.
    fn load(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Computes the identifier the next created task should receive.
    ///
    /// The identifier is not reserved.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskRepository::load`] failures and returns
    /// [`TaskRepositoryError::IdentifierExhausted`] when the highest stored
    /// identifier has no successor.
    fn next_id(&self) -> TaskRepositoryResult<TaskId> {
        next_id_after(&self.load()?)
    }
}

/// Returns `1` for an empty collection, otherwise the highest identifier
/// plus one.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::IdentifierExhausted`] when the highest
/// identifier is `u64::MAX`.
pub fn next_id_after(tasks: &[Task]) -> TaskRepositoryResult<TaskId> {
    match tasks.iter().map(Task::id).max() {
        None => Ok(TaskId::FIRST),
        Some(highest) => highest
            .next()
            .ok_or(TaskRepositoryError::IdentifierExhausted(highest)),
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The storage medium could not be read or written.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),

    /// Persisted data exists but could not be parsed, or the collection
    /// could not be encoded.
    #[error("malformed task data: {0}")]
    Format(Arc<dyn std::error::Error + Send + Sync>),

    /// No identifier follows the highest stored one.
    #[error("no task identifier is available after {0}")]
    IdentifierExhausted(TaskId),
}

impl TaskRepositoryError {
    /// Wraps a storage-medium error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }

    /// Wraps an encoding or decoding error.
    pub fn format(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Format(Arc::new(err))
    }
}
