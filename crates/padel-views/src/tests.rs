//! Unit tests for padel-views.

use chrono::{NaiveDate, NaiveDateTime};

use padel_core::{Court, CourtId, Reservation, ReservationId, ReservationStatus, TimeOfDay};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn court(id: &str) -> Court {
    Court {
        id:             CourtId::new(id),
        name:           format!("Court {id}"),
        description:    String::new(),
        price_per_hour: 16_000,
        indoor:         false,
        has_lights:     true,
    }
}

fn booking(id: &str, court: &str, day: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> Reservation {
    Reservation {
        id: ReservationId::new(id),
        court_id: CourtId::new(court),
        court_name: format!("Court {court}"),
        date: day,
        start,
        end,
        duration_minutes: end.since(start),
        players: vec!["Dante Torres".into()],
        contact_name: "Dante Torres".into(),
        contact_email: "dante@example.com".into(),
        notes: None,
        total_price: 24_000,
        deposit: 7_200,
        deposit_paid: false,
        status: ReservationStatus::Pending,
        reminders_sent: false,
        created_at: at(2025, 4, 28, 10, 0),
        updated_at: None,
        fixed_turn: false,
    }
}

fn hm(h: u16, m: u16) -> TimeOfDay {
    TimeOfDay::hm(h, m)
}

// ── Availability ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod availability {
    use super::*;
    use crate::availability::{day_availability, slots_for_court, SlotStatus};

    #[test]
    fn empty_day_slot_count_matches_grid() {
        // floor((1440 - 480 - D) / 30) + 1 candidate starts for D = 60.
        let slots = slots_for_court(&[], &CourtId::new("c1"), date(2025, 5, 5), 60);
        assert_eq!(slots.len(), (1440 - 480 - 60) / 30 + 1);
        assert!(slots.iter().all(|s| s.status == SlotStatus::Available));
        assert_eq!(slots[0].range.start, hm(8, 0));
        assert_eq!(slots.last().unwrap().range.end, hm(24, 0));
    }

    #[test]
    fn duration_zero_yields_no_slots() {
        assert!(slots_for_court(&[], &CourtId::new("c1"), date(2025, 5, 5), 0).is_empty());
    }

    #[test]
    fn duration_longer_than_window_yields_no_slots() {
        assert!(slots_for_court(&[], &CourtId::new("c1"), date(2025, 5, 5), 961).is_empty());
        // Exactly the window produces the single 08:00-24:00 slot.
        let slots = slots_for_court(&[], &CourtId::new("c1"), date(2025, 5, 5), 960);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn occupied_slots_carry_the_owning_reservation() {
        let day = date(2025, 5, 5);
        let r = booking("r1", "c1", day, hm(18, 0), hm(19, 30));
        let slots = slots_for_court(std::slice::from_ref(&r), &CourtId::new("c1"), day, 60);

        for slot in &slots {
            let should_overlap = r.time_range().overlaps(&slot.range);
            if should_overlap {
                assert_eq!(slot.status, SlotStatus::Reserved);
                assert_eq!(slot.reservation.as_ref().unwrap().id, r.id);
            } else {
                assert_eq!(slot.status, SlotStatus::Available);
                assert!(slot.reservation.is_none());
            }
        }
        // 18:00 booking with 60-min grid slots: starts 17:30..19:00 overlap.
        let occupied: Vec<_> = slots
            .iter()
            .filter(|s| s.status != SlotStatus::Available)
            .map(|s| s.range.start)
            .collect();
        assert_eq!(occupied, vec![hm(17, 30), hm(18, 0), hm(18, 30), hm(19, 0)]);
    }

    #[test]
    fn status_classification() {
        let day = date(2025, 5, 5);

        let mut paid = booking("r1", "c1", day, hm(10, 0), hm(11, 0));
        paid.deposit_paid = true;

        let mut blocked = booking("r2", "c1", day, hm(12, 0), hm(13, 0));
        blocked.status = ReservationStatus::Blocked;
        blocked.deposit_paid = true; // blocked wins over deposit

        let pending = booking("r3", "c1", day, hm(14, 0), hm(15, 0));

        let snapshot = [paid, blocked, pending];
        let slots = slots_for_court(&snapshot, &CourtId::new("c1"), day, 60);

        let status_at = |t: TimeOfDay| slots.iter().find(|s| s.range.start == t).unwrap().status;
        assert_eq!(status_at(hm(10, 0)), SlotStatus::DepositPaid);
        assert_eq!(status_at(hm(12, 0)), SlotStatus::Blocked);
        assert_eq!(status_at(hm(14, 0)), SlotStatus::Reserved);
    }

    #[test]
    fn cancelled_reservations_free_their_slot() {
        let day = date(2025, 5, 5);
        let mut r = booking("r1", "c1", day, hm(18, 0), hm(19, 0));
        r.status = ReservationStatus::Cancelled;
        let slots = slots_for_court(&[r], &CourtId::new("c1"), day, 60);
        assert!(slots.iter().all(|s| s.status == SlotStatus::Available));
    }

    #[test]
    fn other_courts_and_days_do_not_interfere() {
        let day = date(2025, 5, 5);
        let other_court = booking("r1", "c2", day, hm(18, 0), hm(19, 0));
        let other_day = booking("r2", "c1", date(2025, 5, 6), hm(18, 0), hm(19, 0));
        let slots = slots_for_court(&[other_court, other_day], &CourtId::new("c1"), day, 60);
        assert!(slots.iter().all(|s| s.status == SlotStatus::Available));
    }

    #[test]
    fn court_filter_narrows_result() {
        let courts = [court("c1"), court("c2"), court("c3")];
        let all = day_availability(&[], &courts, date(2025, 5, 5), 90, None);
        assert_eq!(all.len(), 3);

        let only = day_availability(&[], &courts, date(2025, 5, 5), 90, Some(&CourtId::new("c2")));
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].court.id, CourtId::new("c2"));

        let none = day_availability(&[], &courts, date(2025, 5, 5), 90, Some(&CourtId::new("c9")));
        assert!(none.is_empty());
    }
}

// ── Conflicts ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod conflict {
    use super::*;
    use crate::conflict::find_conflicts;

    #[test]
    fn flags_overlapping_pair_on_same_court_and_date() {
        let day = date(2025, 5, 5);
        let a = booking("r1", "c1", day, hm(18, 0), hm(19, 30));
        let b = booking("r2", "c1", day, hm(19, 0), hm(20, 0));
        let warnings = find_conflicts(&[a, b]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].first.id, ReservationId::new("r1"));
        assert_eq!(warnings[0].second.id, ReservationId::new("r2"));
        assert_eq!(warnings[0].date, day);
    }

    #[test]
    fn back_to_back_is_not_a_conflict() {
        let day = date(2025, 5, 5);
        let a = booking("r1", "c1", day, hm(18, 0), hm(19, 0));
        let b = booking("r2", "c1", day, hm(19, 0), hm(20, 0));
        assert!(find_conflicts(&[a, b]).is_empty());
    }

    #[test]
    fn different_court_or_date_is_not_a_conflict() {
        let a = booking("r1", "c1", date(2025, 5, 5), hm(18, 0), hm(19, 30));
        let b = booking("r2", "c2", date(2025, 5, 5), hm(18, 0), hm(19, 30));
        let c = booking("r3", "c1", date(2025, 5, 6), hm(18, 0), hm(19, 30));
        assert!(find_conflicts(&[a, b, c]).is_empty());
    }

    #[test]
    fn cancelled_reservations_never_conflict() {
        let day = date(2025, 5, 5);
        let a = booking("r1", "c1", day, hm(18, 0), hm(19, 30));
        let mut b = booking("r2", "c1", day, hm(18, 30), hm(19, 30));
        b.status = ReservationStatus::Cancelled;
        assert!(find_conflicts(&[a, b]).is_empty());
    }

    #[test]
    fn triple_overlap_yields_three_pairs() {
        let day = date(2025, 5, 5);
        let a = booking("r1", "c1", day, hm(18, 0), hm(20, 0));
        let b = booking("r2", "c1", day, hm(18, 30), hm(19, 30));
        let c = booking("r3", "c1", day, hm(19, 0), hm(21, 0));
        assert_eq!(find_conflicts(&[a, b, c]).len(), 3);
    }

    #[test]
    fn output_is_sorted_by_date_then_scan_order() {
        let a = booking("r1", "c1", date(2025, 5, 6), hm(18, 0), hm(19, 0));
        let b = booking("r2", "c1", date(2025, 5, 6), hm(18, 30), hm(19, 30));
        let c = booking("r3", "c1", date(2025, 5, 5), hm(10, 0), hm(11, 0));
        let d = booking("r4", "c1", date(2025, 5, 5), hm(10, 30), hm(11, 30));
        let warnings = find_conflicts(&[a, b, c, d]);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].date, date(2025, 5, 5));
        assert_eq!(warnings[1].date, date(2025, 5, 6));
    }
}

// ── Aggregation views ─────────────────────────────────────────────────────────

#[cfg(test)]
mod views {
    use super::*;
    use crate::views::{
        month_density, my_reservations, upcoming_reminders, week_overview, UserIdentity,
    };
    use chrono::Datelike;

    #[test]
    fn week_overview_is_seven_consecutive_days_from_monday() {
        let overview = week_overview(&[], date(2025, 5, 7)); // a Wednesday
        assert_eq!(overview.len(), 7);
        assert_eq!(overview[0].date, date(2025, 5, 5));
        assert_eq!(overview[0].date.weekday(), chrono::Weekday::Mon);
        for pair in overview.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + chrono::Days::new(1));
        }
    }

    #[test]
    fn week_overview_sorts_by_start_and_drops_cancelled() {
        let monday = date(2025, 5, 5);
        let late = booking("r1", "c1", monday, hm(20, 0), hm(21, 0));
        let early = booking("r2", "c2", monday, hm(9, 0), hm(10, 0));
        let mut gone = booking("r3", "c3", monday, hm(12, 0), hm(13, 0));
        gone.status = ReservationStatus::Cancelled;

        let overview = week_overview(&[late, early, gone], monday);
        let ids: Vec<_> = overview[0].reservations.iter().map(|r| r.id.as_str().to_owned()).collect();
        assert_eq!(ids, vec!["r2", "r1"]);
    }

    #[test]
    fn month_density_counts_per_day_sorted() {
        let r1 = booking("r1", "c1", date(2025, 5, 5), hm(18, 0), hm(19, 0));
        let r2 = booking("r2", "c2", date(2025, 5, 5), hm(20, 0), hm(21, 0));
        let r3 = booking("r3", "c1", date(2025, 5, 4), hm(9, 0), hm(10, 30));
        let other_month = booking("r4", "c1", date(2025, 6, 5), hm(9, 0), hm(10, 0));

        let density = month_density(&[r1, r2, r3, other_month], date(2025, 5, 20));
        assert_eq!(density.len(), 2);
        assert_eq!((density[0].date, density[0].count), (date(2025, 5, 4), 1));
        assert_eq!((density[1].date, density[1].count), (date(2025, 5, 5), 2));
    }

    #[test]
    fn month_density_includes_cancelled() {
        let mut r = booking("r1", "c1", date(2025, 5, 5), hm(18, 0), hm(19, 0));
        r.status = ReservationStatus::Cancelled;
        assert_eq!(month_density(&[r], date(2025, 5, 1)).len(), 1);
    }

    #[test]
    fn ownership_matches_email_case_insensitive_and_player_name() {
        let user = UserIdentity::new("Dante Torres", "DANTE@EXAMPLE.COM");
        let by_email = booking("r1", "c1", date(2025, 5, 5), hm(18, 0), hm(19, 0));
        assert!(user.owns(&by_email));

        let mut by_player = booking("r2", "c1", date(2025, 5, 5), hm(20, 0), hm(21, 0));
        by_player.contact_email = "someone@else.com".into();
        by_player.players = vec!["  dante torres ".into()];
        assert!(user.owns(&by_player));

        let mut stranger = booking("r3", "c1", date(2025, 5, 5), hm(21, 0), hm(22, 0));
        stranger.contact_email = "someone@else.com".into();
        stranger.players = vec!["Laura Medina".into()];
        assert!(!user.owns(&stranger));
    }

    #[test]
    fn partition_is_strict_and_sorted() {
        let user = UserIdentity::new("Dante Torres", "dante@example.com");
        let now = at(2025, 5, 5, 12, 0);

        let future_a = booking("r1", "c1", date(2025, 5, 6), hm(18, 0), hm(19, 0));
        let future_b = booking("r2", "c1", date(2025, 5, 5), hm(14, 0), hm(15, 0));
        let past = booking("r3", "c1", date(2025, 5, 4), hm(9, 0), hm(10, 0));
        let mut cancelled_future = booking("r4", "c1", date(2025, 5, 9), hm(9, 0), hm(10, 0));
        cancelled_future.status = ReservationStatus::Cancelled;
        let mut not_mine = booking("r5", "c1", date(2025, 5, 6), hm(10, 0), hm(11, 0));
        not_mine.contact_email = "laura@example.com".into();
        not_mine.players = vec!["Laura Medina".into()];

        let snapshot = [future_a, future_b, past, cancelled_future, not_mine];
        let mine = my_reservations(&snapshot, &user, now);

        let upcoming: Vec<_> = mine.upcoming.iter().map(|r| r.id.as_str().to_owned()).collect();
        let history: Vec<_> = mine.history.iter().map(|r| r.id.as_str().to_owned()).collect();
        assert_eq!(upcoming, vec!["r2", "r1"]); // ascending
        assert_eq!(history, vec!["r4", "r3"]); // descending

        // Strict partition: no id in both, none dropped.
        assert_eq!(upcoming.len() + history.len(), 4);
        assert!(upcoming.iter().all(|id| !history.contains(id)));
    }

    #[test]
    fn booking_still_in_progress_counts_as_upcoming() {
        let user = UserIdentity::new("Dante Torres", "dante@example.com");
        let now = at(2025, 5, 5, 18, 30);
        let in_progress = booking("r1", "c1", date(2025, 5, 5), hm(18, 0), hm(19, 30));
        let mine = my_reservations(&[in_progress], &user, now);
        assert_eq!(mine.upcoming.len(), 1);
        assert!(mine.history.is_empty());
    }

    #[test]
    fn reminders_cover_now_through_three_days() {
        let now = at(2025, 5, 5, 12, 0);
        let today = booking("r1", "c1", date(2025, 5, 5), hm(18, 0), hm(19, 0));
        let in_three_days = booking("r2", "c1", date(2025, 5, 8), hm(11, 0), hm(12, 0));
        let too_far = booking("r3", "c1", date(2025, 5, 9), hm(18, 0), hm(19, 0));
        let long_past = booking("r4", "c1", date(2025, 5, 3), hm(9, 0), hm(10, 0));
        let mut cancelled = booking("r5", "c1", date(2025, 5, 6), hm(9, 0), hm(10, 0));
        cancelled.status = ReservationStatus::Cancelled;

        let items = upcoming_reminders(&[today, in_three_days, too_far, long_past, cancelled], now);
        let ids: Vec<_> = items.iter().map(|i| i.reservation.id.as_str().to_owned()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
        assert_eq!(items[0].days_to_go, 1); // 6 h away rounds up to 1
        assert_eq!(items[1].days_to_go, 3);
    }

    #[test]
    fn reminder_days_use_ceiling() {
        let now = at(2025, 5, 5, 12, 0);
        // Started two hours ago: ceil(-2h / 1d) == 0, still inside the window.
        let just_started = booking("r1", "c1", date(2025, 5, 5), hm(10, 0), hm(11, 0));
        let items = upcoming_reminders(&[just_started], now);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].days_to_go, 0);
    }
}

// ── Filter ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter {
    use super::*;
    use crate::filter::ReservationFilter;

    fn snapshot() -> Vec<Reservation> {
        let mut r2 = booking("r2", "c2", date(2025, 5, 5), hm(20, 0), hm(21, 0));
        r2.contact_name = "Laura Medina".into();
        r2.contact_email = "laura@example.com".into();
        r2.players = vec!["Laura Medina".into(), "Sol Aguirre".into()];
        let mut r3 = booking("r3", "c2", date(2025, 5, 4), hm(9, 0), hm(10, 30));
        r3.status = ReservationStatus::Completed;
        vec![
            booking("r1", "c1", date(2025, 5, 5), hm(18, 0), hm(19, 30)),
            r2,
            r3,
        ]
    }

    #[test]
    fn default_filter_passes_everything_sorted() {
        let result = ReservationFilter::default().apply(&snapshot());
        let ids: Vec<_> = result.iter().map(|r| r.id.as_str().to_owned()).collect();
        assert_eq!(ids, vec!["r3", "r1", "r2"]);
    }

    #[test]
    fn narrows_by_court_status_and_duration() {
        let snapshot = snapshot();
        let by_court = ReservationFilter { court: Some(CourtId::new("c2")), ..Default::default() };
        assert_eq!(by_court.apply(&snapshot).len(), 2);

        let by_status = ReservationFilter {
            status: Some(ReservationStatus::Completed),
            ..Default::default()
        };
        assert_eq!(by_status.apply(&snapshot).len(), 1);

        let by_duration =
            ReservationFilter { duration_minutes: Some(90), ..Default::default() };
        assert_eq!(by_duration.apply(&snapshot).len(), 2);
    }

    #[test]
    fn date_range_is_inclusive() {
        let f = ReservationFilter {
            from: Some(date(2025, 5, 5)),
            to: Some(date(2025, 5, 5)),
            ..Default::default()
        };
        assert_eq!(f.apply(&snapshot()).len(), 2);
    }

    #[test]
    fn search_matches_players_case_insensitive() {
        let f = ReservationFilter { search: Some("sol AGUIRRE".into()), ..Default::default() };
        let result = f.apply(&snapshot());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ReservationId::new("r2"));
    }

    #[test]
    fn blank_search_is_ignored() {
        let f = ReservationFilter { search: Some("   ".into()), ..Default::default() };
        assert_eq!(f.apply(&snapshot()).len(), 3);
    }
}
