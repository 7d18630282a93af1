//! Shared fixtures for in-memory integration tests.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use taskboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};

/// Service type under test.
pub type TestService = TaskService<InMemoryTaskRepository, SteppingClock>;

/// Deterministic clock advancing one second per reading.
#[derive(Debug)]
pub struct SteppingClock {
    seconds: AtomicI64,
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self {
            seconds: AtomicI64::new(1_700_000_000),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let seconds = self.seconds.fetch_add(1, Ordering::SeqCst);
        DateTime::<Utc>::from_timestamp(seconds, 0).expect("valid test timestamp")
    }
}

/// Builds a service over an empty in-memory store.
#[must_use]
pub fn new_service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(SteppingClock::default()),
    )
}
