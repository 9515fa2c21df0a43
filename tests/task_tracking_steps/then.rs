//! Then steps for task tracking BDD scenarios.

use super::world::{TaskWorld, parse_ids};
use rstest_bdd_macros::then;
use task_tracker::task::{
    domain::{Task, TaskDomainError, TaskStatus},
    ports::TaskRepository,
    services::TaskLifecycleError,
};

fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|task| task.id().value()).collect()
}

#[then(r#"task {id:u64} has description "{description}" and status "{status}""#)]
fn task_has_description_and_status(
    world: &TaskWorld,
    id: u64,
    description: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected_status: TaskStatus = status
        .parse()
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let tasks = world.repository.load()?;
    let task = tasks
        .iter()
        .find(|task| task.id().value() == id)
        .ok_or_else(|| eyre::eyre!("task {id} is not stored"))?;

    if task.description() != description || task.status() != expected_status {
        return Err(eyre::eyre!(
            "expected task {id} to be ({description}, {expected_status}), found ({}, {})",
            task.description(),
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"listing tasks with status "{status}" returns ids "{expected}""#)]
fn listing_with_status_returns(
    world: &TaskWorld,
    status: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let listed = ids(&world.service.list_tasks(&status)?);
    let expected_ids = parse_ids(&expected)?;

    if listed != expected_ids {
        return Err(eyre::eyre!(
            "listing '{status}' returned {listed:?}, expected {expected_ids:?}"
        ));
    }
    Ok(())
}

#[then(r#"listing all tasks returns ids "{expected}""#)]
fn listing_all_returns(world: &TaskWorld, expected: String) -> Result<(), eyre::Report> {
    let listed = ids(&world.service.list_tasks("")?);
    let expected_ids = parse_ids(&expected)?;

    if listed != expected_ids {
        return Err(eyre::eyre!(
            "listing all returned {listed:?}, expected {expected_ids:?}"
        ));
    }
    Ok(())
}

#[then(r#"listing tasks with status "{status}" returns no tasks"#)]
fn listing_with_status_returns_nothing(
    world: &TaskWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let listed = world.service.list_tasks(&status)?;

    if !listed.is_empty() {
        return Err(eyre::eyre!(
            "listing '{status}' returned {:?}, expected nothing",
            ids(&listed)
        ));
    }
    Ok(())
}

#[then("the operation fails because task {id:u64} was not found")]
fn operation_fails_not_found(world: &TaskWorld, id: u64) -> Result<(), eyre::Report> {
    let result = world.last_result()?;

    if !matches!(result, Err(TaskLifecycleError::NotFound(missing)) if missing.value() == id) {
        return Err(eyre::eyre!("expected NotFound({id}) error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails with an empty description error")]
fn operation_fails_empty_description(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world.last_result()?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyDescription))
    ) {
        return Err(eyre::eyre!("expected EmptyDescription error, got {result:?}"));
    }
    Ok(())
}

#[then("the stored task count is {count:usize}")]
fn stored_task_count(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world.repository.load()?.len();

    if stored != count {
        return Err(eyre::eyre!("expected {count} stored tasks, found {stored}"));
    }
    Ok(())
}
