//! Time access for deterministic domain logic.

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Operations that need "now" (invoice issue time, timestamp-based invoice
/// numbers) take a `Clock` instead of calling `Utc::now()` directly, so tests
/// can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
