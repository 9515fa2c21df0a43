//! Given steps for task tracking BDD scenarios.

use super::world::TaskWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use task_tracker::task::ports::TaskRepository;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    world
        .repository
        .save(&[])
        .wrap_err("reset repository for scenario")?;
    Ok(())
}

#[given(r#"a task list containing "{description}""#)]
fn task_list_containing(world: &mut TaskWorld, description: String) -> Result<(), eyre::Report> {
    world
        .service
        .add_task(&description)
        .wrap_err("seed task for scenario")?;
    Ok(())
}
