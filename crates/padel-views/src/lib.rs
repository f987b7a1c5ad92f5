//! `padel-views` — pure projections over reservation snapshots.
//!
//! Every function here takes an immutable slice of [`Reservation`]s (a
//! snapshot handed out by `padel-store`) plus whatever reference data it
//! needs, and returns plain data.  Nothing in this crate mutates or caches:
//! views are recomputed on demand, which keeps the engine pull-based — a
//! presentation layer wanting live updates wraps the store, not this crate.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                |
//! |------------------|---------------------------------------------------------|
//! | [`availability`] | `day_availability`, `slots_for_court`, slot grid consts |
//! | [`conflict`]     | `find_conflicts`, `ConflictWarning`                     |
//! | [`views`]        | week overview, month density, my-reservations, reminders|
//! | [`filter`]       | `ReservationFilter` for the admin list                  |
//!
//! [`Reservation`]: padel_core::Reservation

pub mod availability;
pub mod conflict;
pub mod filter;
pub mod views;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use availability::{day_availability, slots_for_court, AvailabilitySlot, CourtAvailability, SlotStatus};
pub use conflict::{find_conflicts, ConflictWarning};
pub use filter::ReservationFilter;
pub use views::{
    month_density, my_reservations, upcoming_reminders, week_overview, DayDensity, MyReservations,
    ReminderItem, UserIdentity, WeekDayOverview,
};
