//! Domain model for the task tracker.
//!
//! The domain owns task validation and status transitions. It has no
//! knowledge of how tasks are stored; persistence lives behind the
//! [`crate::task::ports::TaskRepository`] port.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskDescription, TaskId};
pub use task::{Task, TaskStatus};
