//! Time-of-day and calendar arithmetic.
//!
//! # Design
//!
//! A reservation's start and end are points within a single calendar day, so
//! the canonical time unit is `TimeOfDay` — minutes since midnight stored as
//! an integer.  All interval arithmetic (overlap tests, slot grids, duration
//! checks) is exact integer math; `chrono` enters only where real calendar
//! dates matter (week starts, month grouping, "how far away is this
//! booking").
//!
//! The valid range is `0..=1440`: a booking may end exactly at `24:00`, the
//! club's closing time, which has no representation as a `chrono::NaiveTime`.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::EngineError;

/// Minutes in a full day; also the latest valid `TimeOfDay` (24:00).
pub const MINUTES_PER_DAY: u16 = 24 * 60;

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// A clock time within one day, in minutes since midnight (`0..=1440`).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimeOfDay(pub u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    /// Build from hour/minute components.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the result exceeds 24:00.
    pub const fn hm(hour: u16, minute: u16) -> Self {
        let total = hour * 60 + minute;
        debug_assert!(total <= MINUTES_PER_DAY);
        TimeOfDay(total)
    }

    /// Parse an `HH:MM` string (24-hour clock, `"24:00"` allowed).
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        let bad = || EngineError::Parse(format!("invalid time of day {s:?}: expected HH:MM"));
        let (h, m) = s.split_once(':').ok_or_else(bad)?;
        let hours: u32 = h.trim().parse().map_err(|_| bad())?;
        let minutes: u32 = m.trim().parse().map_err(|_| bad())?;
        let total = hours * 60 + minutes;
        if minutes >= 60 || total > MINUTES_PER_DAY as u32 {
            return Err(bad());
        }
        Ok(TimeOfDay(total as u16))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// The time `minutes` later, or `None` if that would pass 24:00.
    #[inline]
    pub fn checked_add(self, minutes: u32) -> Option<TimeOfDay> {
        let total = self.0 as u32 + minutes;
        (total <= MINUTES_PER_DAY as u32).then(|| TimeOfDay(total as u16))
    }

    /// Minutes elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: TimeOfDay) -> u32 {
        (self.0 - earlier.0) as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

// ── TimeRange ─────────────────────────────────────────────────────────────────

/// A half-open interval `[start, end)` within one day.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end:   TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// `true` if the two half-open intervals intersect.
    ///
    /// Zero-width ranges never overlap anything.
    #[inline]
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Interval length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end.since(self.start)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Monday of the week containing `date`.
///
/// ISO week start: a Sunday maps six days back, any other day maps back by
/// its distance from Monday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_monday() as u64)
}

/// Combine a calendar date and a `TimeOfDay` into an absolute instant.
///
/// `24:00` lands on midnight of the following day.
pub fn combine(date: NaiveDate, time: TimeOfDay) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + TimeDelta::minutes(time.minutes() as i64)
}
