//! Shared world state for task tracking BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use task_tracker::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task tracking behaviour tests.
pub struct TaskWorld {
    pub repository: InMemoryTaskRepository,
    pub service: TestTaskService,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskWorld {
    /// Creates a world over an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = InMemoryTaskRepository::new();
        let service =
            TaskLifecycleService::new(Arc::new(repository.clone()), Arc::new(DefaultClock));

        Self {
            repository,
            service,
            last_result: None,
        }
    }

    /// Returns the recorded outcome of the last `When` step.
    pub fn last_result(&self) -> Result<&Result<Task, TaskLifecycleError>, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no operation has been performed in this scenario"))
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Parses a comma-separated list of task identifiers such as `"1,2"`.
pub fn parse_ids(ids: &str) -> Result<Vec<u64>, eyre::Report> {
    ids.split(',')
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|err| eyre::eyre!("invalid id '{raw}' in scenario: {err}"))
        })
        .collect()
}
