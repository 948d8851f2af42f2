//! Injectable time source.
//!
//! The only place the extractor touches the current time is the default
//! transaction date for receipts without a parseable date. Keeping that
//! behind a trait makes the parse reproducible in tests.

use chrono::{DateTime, Utc};

/// Supplies the processing timestamp used when no date is found.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
