//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task description is empty after trimming.
    #[error("Task description cannot be empty")]
    EmptyDescription,

    /// The task identifier is not a positive integer.
    #[error("Invalid task ID: {0}")]
    InvalidTaskId(u64),
}

/// Error returned while parsing a task status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid task status '{0}', expected one of: todo, in-progress, done")]
pub struct ParseTaskStatusError(pub String);
