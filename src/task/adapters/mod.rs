//! Adapter implementations of the task repository port.

pub mod file;
pub mod memory;
