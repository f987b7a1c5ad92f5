//! CSV seed loader.
//!
//! # CSV format
//!
//! One row per reservation.  `players` is `;`-separated (may be empty),
//! `date` is `YYYY-MM-DD`, times are `HH:MM`, `created_at` is an ISO
//! date-time without zone, `status` is one of the five status names.
//!
//! ```csv
//! id,court_id,court_name,date,start,end,duration_minutes,players,contact_name,contact_email,notes,total_price,deposit,deposit_paid,status,reminders_sent,created_at
//! r1,c1,Cancha 1,2025-05-05,18:00,19:30,90,Dante Torres;Juan Pérez,Dante Torres,dante@example.com,Traigo invitados,24000,7200,true,confirmed,false,2025-04-28T10:00:00
//! ```
//!
//! Rows feed [`ReservationStore::seed_reservations`], which checks shape but
//! deliberately not double-booking — seed files carry the history the
//! conflict detector reports over.
//!
//! [`ReservationStore::seed_reservations`]: crate::ReservationStore::seed_reservations

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use padel_core::{EngineError, EngineResult, Reservation, ReservationStatus, TimeOfDay};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ReservationRecord {
    id:               String,
    court_id:         String,
    court_name:       String,
    date:             String,
    start:            String,
    end:              String,
    duration_minutes: u32,
    players:          String,
    contact_name:     String,
    contact_email:    String,
    notes:            String,
    total_price:      i64,
    deposit:          i64,
    deposit_paid:     bool,
    status:           String,
    reminders_sent:   bool,
    created_at:       String,
    #[serde(default)]
    fixed_turn:       bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load reservation seed records from a CSV file.
pub fn load_reservations_csv(path: &Path) -> EngineResult<Vec<Reservation>> {
    let file = std::fs::File::open(path).map_err(EngineError::Io)?;
    load_reservations_reader(file)
}

/// Like [`load_reservations_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_reservations_reader<R: Read>(reader: R) -> EngineResult<Vec<Reservation>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut reservations = Vec::new();

    for result in csv_reader.deserialize::<ReservationRecord>() {
        let row = result.map_err(|e| EngineError::Parse(e.to_string()))?;
        reservations.push(build_reservation(row)?);
    }

    Ok(reservations)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_reservation(row: ReservationRecord) -> EngineResult<Reservation> {
    let date = parse_date(&row.date)?;
    let created_at = parse_datetime(&row.created_at)?;
    let players: Vec<String> = row
        .players
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect();

    Ok(Reservation {
        id: row.id.into(),
        court_id: row.court_id.into(),
        court_name: row.court_name,
        date,
        start: TimeOfDay::parse(&row.start)?,
        end: TimeOfDay::parse(&row.end)?,
        duration_minutes: row.duration_minutes,
        players,
        contact_name: row.contact_name,
        contact_email: row.contact_email,
        notes: (!row.notes.is_empty()).then_some(row.notes),
        total_price: row.total_price,
        deposit: row.deposit,
        deposit_paid: row.deposit_paid,
        status: ReservationStatus::parse(&row.status)?,
        reminders_sent: row.reminders_sent,
        created_at,
        updated_at: None,
        fixed_turn: row.fixed_turn,
    })
}

fn parse_date(s: &str) -> EngineResult<NaiveDate> {
    s.parse::<NaiveDate>()
        .map_err(|_| EngineError::Parse(format!("invalid date {s:?}: expected YYYY-MM-DD")))
}

fn parse_datetime(s: &str) -> EngineResult<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .map_err(|_| EngineError::Parse(format!("invalid date-time {s:?}")))
}
