//! Durable flat-file adapters for task persistence.

mod task;

pub use task::JsonFileTaskRepository;
