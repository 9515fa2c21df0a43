//! Task tracking core.
//!
//! Tasks are created, described, moved between statuses and deleted through
//! [`services::TaskLifecycleService`], which performs one full
//! load-mutate-save cycle per operation against a
//! [`ports::TaskRepository`]. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
