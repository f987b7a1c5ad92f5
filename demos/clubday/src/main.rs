//! clubday — walk through one day of the padel club's schedule.
//!
//! Seeds the store with the demo fixture, blocks a weekly maintenance slot,
//! then prints availability, double-booking warnings, the week overview, and
//! reminder candidates for the reference date the fixture is built around.

use anyhow::Result;
use chrono::NaiveDate;

use padel_core::{CourtId, TimeOfDay};
use padel_store::{seed, BlockRequest, FixedClock, ReservationStore};
use padel_views::{
    day_availability, find_conflicts, my_reservations, upcoming_reminders, week_overview,
    SlotStatus, UserIdentity,
};

const SEED: u64 = 42;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    // The fixture lives in early May 2025; pin "now" so output is stable.
    let reference = NaiveDate::from_ymd_opt(2025, 5, 5).expect("valid date");
    let now = reference.and_hms_opt(12, 0, 0).expect("valid time");

    let mut store =
        ReservationStore::with_clock(seed::demo_courts(), Box::new(FixedClock(now)), SEED);
    store.seed_reservations(seed::demo_reservations())?;

    // Block Monday noon on Cancha 1 for the next three weeks.
    let placed = store.block_slot(BlockRequest {
        court_id: CourtId::new("c1"),
        date: reference,
        start: TimeOfDay::hm(12, 0),
        end: TimeOfDay::hm(13, 0),
        reason: Some("Mantenimiento semanal".into()),
        repeat_weeks: 3,
    })?;
    println!("placed {} weekly maintenance blocks\n", placed.len());

    let snapshot = store.reservations();

    // ── Day availability ──────────────────────────────────────────────────
    println!("availability on {reference} (90-minute turns):");
    for court in day_availability(&snapshot, store.courts(), reference, 90, None) {
        let free = court
            .slots
            .iter()
            .filter(|s| s.status == SlotStatus::Available)
            .count();
        println!("  {:10} {free:2}/{} slots free", court.court.name, court.slots.len());
    }

    // ── Conflicts ─────────────────────────────────────────────────────────
    let warnings = find_conflicts(&snapshot);
    println!("\ndouble-booking warnings: {}", warnings.len());
    for w in &warnings {
        println!("  {} on {}: {} vs {}", w.court_name, w.date, w.first.id, w.second.id);
    }

    // ── Week overview ─────────────────────────────────────────────────────
    println!("\nweek of {}:", reference);
    for day in week_overview(&snapshot, reference) {
        println!("  {:12} {} reservation(s)", day.label, day.reservations.len());
    }

    // ── My reservations & reminders ───────────────────────────────────────
    let dante = UserIdentity::new("Dante Torres", "dante@example.com");
    let mine = my_reservations(&snapshot, &dante, now);
    println!(
        "\n{}: {} upcoming, {} in history",
        dante.name,
        mine.upcoming.len(),
        mine.history.len()
    );

    if store.settings().auto_reminders {
        let reminders = upcoming_reminders(&snapshot, now);
        println!("reminders due: {}", serde_json::to_string_pretty(&reminders)?);
    }

    Ok(())
}
