//! When steps for task tracking BDD scenarios.

use super::world::TaskWorld;
use rstest_bdd_macros::when;
use task_tracker::task::domain::TaskId;

fn task_id(raw: u64) -> Result<TaskId, eyre::Report> {
    TaskId::new(raw).map_err(|err| eyre::eyre!("invalid id in scenario: {err}"))
}

#[when(r#"I add a task "{description}""#)]
fn add_task(world: &mut TaskWorld, description: String) {
    world.last_result = Some(world.service.add_task(&description));
}

#[when("I add a task with a blank description")]
fn add_blank_task(world: &mut TaskWorld) {
    world.last_result = Some(world.service.add_task(" \t "));
}

#[when(r#"I update task {id:u64} to "{description}""#)]
fn update_task(world: &mut TaskWorld, id: u64, description: String) -> Result<(), eyre::Report> {
    let result = world.service.update_task(task_id(id)?, &description);
    world.last_result = Some(result);
    Ok(())
}

#[when("I mark task {id:u64} as in progress")]
fn mark_in_progress(world: &mut TaskWorld, id: u64) -> Result<(), eyre::Report> {
    let result = world.service.mark_task_in_progress(task_id(id)?);
    world.last_result = Some(result);
    Ok(())
}

#[when("I mark task {id:u64} as done")]
fn mark_done(world: &mut TaskWorld, id: u64) -> Result<(), eyre::Report> {
    let result = world.service.mark_task_done(task_id(id)?);
    world.last_result = Some(result);
    Ok(())
}

#[when("I delete task {id:u64}")]
fn delete_task(world: &mut TaskWorld, id: u64) -> Result<(), eyre::Report> {
    let result = world.service.delete_task(task_id(id)?);
    world.last_result = Some(result);
    Ok(())
}
