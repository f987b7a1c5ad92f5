//! Double-booking detection.
//!
//! The store rejects new overlapping bookings, but seeded or imported data
//! may still carry collisions, so detection stays a standalone scan over any
//! snapshot.  Non-cancelled records are stably sorted by `(date, start)` and
//! bucketed by `(date, court)`; the pairwise overlap test then runs only
//! within each bucket, keeping the quadratic factor bounded by the busiest
//! court-day instead of the whole snapshot.  A `BTreeMap` keeps bucket
//! iteration — and therefore output order — deterministic.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use padel_core::{CourtId, Reservation};

/// Two reservations occupying the same court at the same time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictWarning {
    pub court_id:   CourtId,
    pub court_name: String,
    pub date:       NaiveDate,
    pub first:      Reservation,
    pub second:     Reservation,
}

/// Find every pair of non-cancelled reservations whose intervals intersect
/// on the same court and date.
///
/// For each bucket the pairs come out in `(i, j)` scan order over the
/// sorted sequence, so output is deterministic for a given snapshot.
pub fn find_conflicts(reservations: &[Reservation]) -> Vec<ConflictWarning> {
    let mut active: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.status.occupies_court())
        .collect();
    // Stable sort: ties keep their original snapshot order.
    active.sort_by(|a, b| (a.date, a.start).cmp(&(b.date, b.start)));

    let mut buckets: BTreeMap<(NaiveDate, CourtId), Vec<&Reservation>> = BTreeMap::new();
    for r in active {
        buckets.entry((r.date, r.court_id.clone())).or_default().push(r);
    }

    let mut warnings = Vec::new();
    for ((date, court_id), group) in buckets {
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                if group[i].time_range().overlaps(&group[j].time_range()) {
                    warnings.push(ConflictWarning {
                        court_id:   court_id.clone(),
                        court_name: group[i].court_name.clone(),
                        date,
                        first:      group[i].clone(),
                        second:     group[j].clone(),
                    });
                }
            }
        }
    }
    warnings
}
