//! In-memory repository for task service tests.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe volatile task repository.
///
/// Clones share the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `tasks` in the given order.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks.into_iter().collect())),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::storage(std::io::Error::other(err.to_string()))
}

impl TaskRepository for InMemoryTaskRepository {
    fn save(&self, tasks: &[Task]) -> TaskRepositoryResult<()> {
        let mut state = self.tasks.write().map_err(poisoned)?;
        *state = tasks.to_vec();
        Ok(())
    }

    fn load(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.tasks.read().map_err(poisoned)?;
        Ok(state.clone())
    }
}
