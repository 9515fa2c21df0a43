//! Deterministic clocks and task builders shared by unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeZone, Utc};
use mockall::mock;

use crate::task::domain::{Task, TaskId};

mock! {
    pub Clock {}

    impl mockable::Clock for Clock {
        fn local(&self) -> DateTime<Local>;
        fn utc(&self) -> DateTime<Utc>;
    }
}

/// Instant all test clocks start from.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Clock that always reports `instant`.
pub fn fixed_clock(instant: DateTime<Utc>) -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_utc().returning(move || instant);
    clock
}

/// Clock advancing by one second on every reading, starting at [`epoch`].
pub fn stepping_clock() -> MockClock {
    let ticks = Arc::new(AtomicI64::new(0));
    let mut clock = MockClock::new();
    clock.expect_utc().returning(move || {
        let tick = ticks.fetch_add(1, Ordering::SeqCst);
        epoch() + chrono::Duration::seconds(tick)
    });
    clock
}

/// Builds a `todo` task stamped at [`epoch`].
pub fn task(id: u64, description: &str) -> Task {
    let id = TaskId::new(id).expect("test ids are positive");
    Task::new(id, description, &fixed_clock(epoch())).expect("test descriptions are non-empty")
}
