//! Injectable time source.
//!
//! The scheduling services never call `Utc::now()` directly; they take a
//! [`Clock`] so tests can pin "now" to a fixed instant.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;

    /// Today's facility-local calendar date.
    fn today(&self) -> NaiveDate {
        self.now_utc().date_naive()
    }
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
