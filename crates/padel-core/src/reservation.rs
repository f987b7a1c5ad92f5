//! Reservation records and their lifecycle states.
//!
//! # Lifecycle
//!
//! A reservation is created `Pending` (deposit outstanding) or `Confirmed`
//! (deposit paid up front), moves to `Completed` once played, and may be
//! soft-withdrawn to `Cancelled` at any point.  `Blocked` is an
//! administrative hold with no paying customer — it occupies the court like
//! a booking but is created and removed by the club, not a player.
//!
//! Cancelled records stay in the store (history, audit) but free their slot;
//! every other status occupies it.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::EngineError;
use crate::time::{combine, TimeOfDay, TimeRange};
use crate::{CourtId, ReservationId};

// ── ReservationStatus ─────────────────────────────────────────────────────────

/// Closed set of reservation states.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReservationStatus {
    /// Awaiting the deposit.
    Pending,
    /// Deposit paid or otherwise validated.
    Confirmed,
    /// Played and closed out.
    Completed,
    /// Withdrawn; frees the slot but stays on record.
    Cancelled,
    /// Administrative hold (maintenance, tournaments) — no paying customer.
    Blocked,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Blocked => "blocked",
        }
    }

    pub fn parse(s: &str) -> Result<Self, EngineError> {
        match s.trim() {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "completed" => Ok(ReservationStatus::Completed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "blocked" => Ok(ReservationStatus::Blocked),
            other => Err(EngineError::Parse(format!(
                "unknown reservation status {other:?}"
            ))),
        }
    }

    #[inline]
    pub fn is_cancelled(self) -> bool {
        matches!(self, ReservationStatus::Cancelled)
    }

    /// `true` if a reservation in this state keeps its slot occupied.
    #[inline]
    pub fn occupies_court(self) -> bool {
        !self.is_cancelled()
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Reservation ───────────────────────────────────────────────────────────────

/// One booking (or administrative block) of a court for a time range within
/// a single calendar day.
///
/// `court_name` is a denormalized copy taken at creation time so that views
/// over a snapshot never need the court list.  `duration_minutes` always
/// equals `end - start`; the store validates this on insertion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reservation {
    pub id:               ReservationId,
    pub court_id:         CourtId,
    pub court_name:       String,
    pub date:             NaiveDate,
    pub start:            TimeOfDay,
    pub end:              TimeOfDay,
    pub duration_minutes: u32,

    /// Player names in booking order; empty for administrative blocks.
    pub players:          Vec<String>,
    pub contact_name:     String,
    pub contact_email:    String,
    pub notes:            Option<String>,

    pub total_price:      i64,
    pub deposit:          i64,
    pub deposit_paid:     bool,

    pub status:           ReservationStatus,
    pub reminders_sent:   bool,

    pub created_at:       NaiveDateTime,
    pub updated_at:       Option<NaiveDateTime>,

    /// Marks a weekly recurring block ("fixed turn").
    pub fixed_turn:       bool,
}

impl Reservation {
    /// The booked interval as a half-open range.
    #[inline]
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    /// Absolute instant at which the booking begins.
    pub fn starts_at(&self) -> NaiveDateTime {
        combine(self.date, self.start)
    }

    /// Absolute instant at which the booking ends.
    pub fn ends_at(&self) -> NaiveDateTime {
        combine(self.date, self.end)
    }

    /// `true` if `self` and `other` occupy the same court on the same day
    /// with intersecting time ranges.  Ignores status — callers filter
    /// cancelled records first.
    pub fn overlaps(&self, other: &Reservation) -> bool {
        self.court_id == other.court_id
            && self.date == other.date
            && self.time_range().overlaps(&other.time_range())
    }
}
