//! Calendar aggregation views: week overview, month density, the
//! per-user upcoming/history partition, and the reminder window.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveDateTime};

use padel_core::{week_start, Reservation};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// Reminders cover bookings starting within the next three days.
const REMINDER_HORIZON_DAYS: i64 = 3;

// ── Week overview ─────────────────────────────────────────────────────────────

/// One day of the week view: the date and its non-cancelled reservations
/// sorted by start time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekDayOverview {
    pub date:         NaiveDate,
    pub label:        String,
    pub reservations: Vec<Reservation>,
}

/// The seven days of the week containing `reference`, starting on Monday.
pub fn week_overview(reservations: &[Reservation], reference: NaiveDate) -> Vec<WeekDayOverview> {
    let monday = week_start(reference);
    (0..7u64)
        .map(|offset| {
            let date = monday + Days::new(offset);
            let mut day: Vec<Reservation> = reservations
                .iter()
                .filter(|r| r.date == date && r.status.occupies_court())
                .cloned()
                .collect();
            day.sort_by_key(|r| r.start);
            WeekDayOverview {
                date,
                label: date.format("%a %d %b").to_string(),
                reservations: day,
            }
        })
        .collect()
}

// ── Month density ─────────────────────────────────────────────────────────────

/// Reservation count for one calendar day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayDensity {
    pub date:  NaiveDate,
    pub count: usize,
}

/// Per-day reservation counts within `reference`'s month, ascending by date.
///
/// Counts every status — the calendar heat view shows cancelled days too.
pub fn month_density(reservations: &[Reservation], reference: NaiveDate) -> Vec<DayDensity> {
    use chrono::Datelike;

    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for r in reservations {
        if r.date.year() == reference.year() && r.date.month() == reference.month() {
            *counts.entry(r.date).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(date, count)| DayDensity { date, count })
        .collect()
}

// ── My reservations ───────────────────────────────────────────────────────────

/// The person whose bookings the "my reservations" view shows.
#[derive(Clone, Debug)]
pub struct UserIdentity {
    pub name:  String,
    pub email: String,
}

impl UserIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }

    /// Ownership test: case-insensitive contact-email match, or any player
    /// name matching after trimming and lowercasing.
    pub fn owns(&self, reservation: &Reservation) -> bool {
        reservation.contact_email.eq_ignore_ascii_case(&self.email)
            || reservation
                .players
                .iter()
                .any(|p| normalize(p) == normalize(&self.name))
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Strict partition of a user's reservations into upcoming and history.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MyReservations {
    /// Not cancelled and not yet ended, ascending by `(date, start)`.
    pub upcoming: Vec<Reservation>,
    /// Ended or cancelled, descending by `(date, start)`.
    pub history:  Vec<Reservation>,
}

/// Partition the snapshot into the user's upcoming bookings and history.
///
/// A booking is "past" once its end instant is before `now`; cancelled
/// bookings are history regardless of date.  Every owned reservation lands
/// in exactly one of the two lists.
pub fn my_reservations(
    reservations: &[Reservation],
    user: &UserIdentity,
    now: NaiveDateTime,
) -> MyReservations {
    let mut result = MyReservations::default();
    for r in reservations.iter().filter(|r| user.owns(r)) {
        if r.status.is_cancelled() || r.ends_at() < now {
            result.history.push(r.clone());
        } else {
            result.upcoming.push(r.clone());
        }
    }
    result.upcoming.sort_by(|a, b| (a.date, a.start).cmp(&(b.date, b.start)));
    result.history.sort_by(|a, b| (b.date, b.start).cmp(&(a.date, a.start)));
    result
}

// ── Reminders ─────────────────────────────────────────────────────────────────

/// A booking close enough to warrant a reminder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReminderItem {
    pub reservation: Reservation,
    /// Whole days until the booking starts, rounded up.  `0` means today.
    pub days_to_go:  i64,
}

/// Non-cancelled reservations starting within the next three days (day
/// granularity, ceiling of the millisecond difference), ascending by
/// `days_to_go`.
pub fn upcoming_reminders(reservations: &[Reservation], now: NaiveDateTime) -> Vec<ReminderItem> {
    let mut items: Vec<ReminderItem> = reservations
        .iter()
        .filter(|r| r.status.occupies_court())
        .filter_map(|r| {
            let millis = (r.starts_at() - now).num_milliseconds();
            // `i64::div_ceil` is still unstable (`int_roundings`); this is the
            // same ceiling division for a positive divisor.
            let days_to_go =
                millis / MILLIS_PER_DAY + (millis % MILLIS_PER_DAY > 0) as i64;
            (0..=REMINDER_HORIZON_DAYS)
                .contains(&days_to_go)
                .then(|| ReminderItem { reservation: r.clone(), days_to_go })
        })
        .collect();
    items.sort_by_key(|item| item.days_to_go);
    items
}
