//! Wall-clock seam.
//!
//! The store stamps `created_at`/`updated_at` and derives reminder windows
//! from "now", so the time source is a trait: production uses the system
//! clock, tests pin an instant and assert on exact timestamps.

use chrono::{Local, NaiveDateTime};

/// Source of the current local date-time.
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}

/// The real system clock (club-local wall time).
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.  Use in tests for deterministic stamps.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
