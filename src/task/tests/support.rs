//! Shared helpers for task unit tests.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Deterministic clock advancing one second per reading.
///
/// Guarantees strictly increasing timestamps so tests can assert that
/// `updated_at` moves forward on every mutation.
#[derive(Debug)]
pub struct SteppingClock {
    seconds: AtomicI64,
}

impl SteppingClock {
    /// Creates a clock whose first reading is `start` seconds after the
    /// Unix epoch.
    pub const fn new(start: i64) -> Self {
        Self {
            seconds: AtomicI64::new(start),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new(1_700_000_000)
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
