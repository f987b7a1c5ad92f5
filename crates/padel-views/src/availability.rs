//! Per-court availability slot grids.
//!
//! # Grid model
//!
//! The club operates 08:00–24:00.  Candidate slots of the requested duration
//! start every 30 minutes from opening time; the last candidate start is
//! `closing − duration`, so every generated slot fits entirely inside the
//! operating window.  Each candidate is tested against the same-court,
//! same-date, non-cancelled reservations; the first overlapping record (in
//! snapshot order) classifies an occupied slot.
//!
//! The grid step guarantees at most one overlapping booking per slot in a
//! conflict-free store; when the store *does* hold a double-booking, the
//! first match wins here and `conflict::find_conflicts` reports the pair.

use chrono::NaiveDate;

use padel_core::time::TimeRange;
use padel_core::{Court, CourtId, Reservation, TimeOfDay};

/// Opening time of the daily operating window.
pub const OPENING: TimeOfDay = TimeOfDay::hm(8, 0);
/// Closing time of the daily operating window (exclusive end, 24:00).
pub const CLOSING: TimeOfDay = TimeOfDay::END_OF_DAY;
/// Spacing between candidate slot starts, in minutes.
pub const SLOT_STEP_MINUTES: u16 = 30;

// ── Slot types ────────────────────────────────────────────────────────────────

/// How a generated slot is occupied, if at all.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SlotStatus {
    /// Free to book.
    Available,
    /// Occupied by a booking whose deposit is outstanding.
    Reserved,
    /// Occupied by a booking whose deposit is paid.
    DepositPaid,
    /// Withheld by an administrative block.
    Blocked,
}

/// One candidate interval in a court's daily grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailabilitySlot {
    pub range:  TimeRange,
    pub status: SlotStatus,
    /// The occupying record when `status != Available` (read-only copy).
    pub reservation: Option<Reservation>,
}

/// A court together with its generated slot list for one day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourtAvailability {
    pub court: Court,
    pub slots: Vec<AvailabilitySlot>,
}

// ── Grid generation ───────────────────────────────────────────────────────────

/// Availability for every court (or just `court_filter`) on `date`, for
/// bookings of `duration_minutes`.
///
/// A filter matching no court yields an empty result, not an error.
pub fn day_availability(
    reservations: &[Reservation],
    courts: &[Court],
    date: NaiveDate,
    duration_minutes: u32,
    court_filter: Option<&CourtId>,
) -> Vec<CourtAvailability> {
    courts
        .iter()
        .filter(|court| court_filter.is_none_or(|id| *id == court.id))
        .map(|court| CourtAvailability {
            court: court.clone(),
            slots: slots_for_court(reservations, &court.id, date, duration_minutes),
        })
        .collect()
}

/// Generate the slot grid for one court on one day.
///
/// `duration_minutes == 0` (or a duration longer than the operating window)
/// produces no candidate starts and therefore an empty list.
pub fn slots_for_court(
    reservations: &[Reservation],
    court_id: &CourtId,
    date: NaiveDate,
    duration_minutes: u32,
) -> Vec<AvailabilitySlot> {
    if duration_minutes == 0 || duration_minutes > CLOSING.since(OPENING) {
        return Vec::new();
    }

    let same_day: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.court_id == *court_id && r.date == date && r.status.occupies_court())
        .collect();

    let max_start = CLOSING.minutes() as u32 - duration_minutes;
    let mut slots = Vec::new();
    let mut minutes = OPENING.minutes() as u32;

    while minutes <= max_start {
        let range = TimeRange::new(
            TimeOfDay(minutes as u16),
            TimeOfDay((minutes + duration_minutes) as u16),
        );
        let occupant = same_day.iter().find(|r| r.time_range().overlaps(&range));
        slots.push(match occupant {
            None => AvailabilitySlot { range, status: SlotStatus::Available, reservation: None },
            Some(r) => AvailabilitySlot {
                range,
                status: classify(r),
                reservation: Some((*r).clone()),
            },
        });
        minutes += SLOT_STEP_MINUTES as u32;
    }

    slots
}

fn classify(occupant: &Reservation) -> SlotStatus {
    if occupant.status == padel_core::ReservationStatus::Blocked {
        SlotStatus::Blocked
    } else if occupant.deposit_paid {
        SlotStatus::DepositPaid
    } else {
        SlotStatus::Reserved
    }
}
