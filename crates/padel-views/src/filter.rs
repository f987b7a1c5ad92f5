//! Admin-list filtering.
//!
//! Mirrors the booking console's filter bar: court, status, exact duration,
//! inclusive date range, and a free-text search over contact, players, court
//! name, and status.  All criteria are conjunctive; `None` means "any".

use chrono::NaiveDate;

use padel_core::{CourtId, Reservation, ReservationStatus};

/// Criteria for narrowing a reservation snapshot.
#[derive(Clone, Debug, Default)]
pub struct ReservationFilter {
    pub court:            Option<CourtId>,
    pub status:           Option<ReservationStatus>,
    pub duration_minutes: Option<u32>,
    pub from:             Option<NaiveDate>,
    pub to:               Option<NaiveDate>,
    pub search:           Option<String>,
}

impl ReservationFilter {
    /// Apply the filter, returning matches sorted by `(date, start)`.
    pub fn apply(&self, reservations: &[Reservation]) -> Vec<Reservation> {
        let needle = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut matches: Vec<Reservation> = reservations
            .iter()
            .filter(|r| self.matches(r, needle.as_deref()))
            .cloned()
            .collect();
        matches.sort_by(|a, b| (a.date, a.start).cmp(&(b.date, b.start)));
        matches
    }

    fn matches(&self, r: &Reservation, needle: Option<&str>) -> bool {
        if self.court.as_ref().is_some_and(|c| *c != r.court_id) {
            return false;
        }
        if self.status.is_some_and(|s| s != r.status) {
            return false;
        }
        if self.duration_minutes.is_some_and(|d| d != r.duration_minutes) {
            return false;
        }
        if self.from.is_some_and(|from| r.date < from) {
            return false;
        }
        if self.to.is_some_and(|to| r.date > to) {
            return false;
        }
        match needle {
            None => true,
            Some(needle) => {
                let haystack = format!(
                    "{} {} {} {} {}",
                    r.contact_name,
                    r.contact_email,
                    r.players.join(", "),
                    r.court_name,
                    r.status
                )
                .to_lowercase();
                haystack.contains(needle)
            }
        }
    }
}
