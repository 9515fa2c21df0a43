//! Task Tracker: a single-user task list persisted as a JSON file.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: task entity, identifiers and status values
//! - **Ports**: the whole-collection [`task::ports::TaskRepository`] contract
//! - **Adapters**: JSON file and in-memory repositories
//! - **Services**: task use cases orchestrated over a repository and clock
//!
//! # Modules
//!
//! - [`task`]: task domain, storage and lifecycle operations
//! - [`cli`]: the `task-cli` command-line adapter
//! - [`logging`]: `tracing` subscriber setup for the binary

pub mod cli;
mod fs;
pub mod logging;
pub mod task;

#[cfg(test)]
pub(crate) mod test_support;
