//! Unit tests for the task module.
//!
//! Tests are organised by layer: domain values and transitions, the
//! repository contract and its adapters, and service orchestration.
