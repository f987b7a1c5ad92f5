//! The reservation store and its mutation surface.
//!
//! # Mutation rules
//!
//! - `add_reservation` / `create_reservation` validate shape (duplicate id,
//!   unknown court, inverted interval, duration mismatch) and reject
//!   double-bookings with [`EngineError::SlotTaken`].  Nothing is inserted
//!   on failure.
//! - Status changes (`cancel_reservation`, `mark_deposit_paid`, ...) are
//!   partial updates that stamp `updated_at`.
//! - `remove` hard-deletes; `cancel_reservation` keeps the record with
//!   status `Cancelled` (history and audit survive, the slot frees up).
//! - `block_slot` places one `Blocked` record per requested week, skipping
//!   any week whose interval is already taken — it never fails on conflict,
//!   it just returns the records it could place.
//! - `seed_reservations` bypasses the double-booking check so imported or
//!   historical data with collisions still loads and can be surfaced by
//!   conflict detection.

use chrono::{Days, NaiveDate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use padel_core::{
    Court, CourtId, EngineError, EngineResult, Reservation, ReservationId, ReservationStatus,
    TimeOfDay,
};

use crate::clock::{Clock, SystemClock};

/// Contact recorded on administrative blocks.
const ADMIN_CONTACT_NAME: &str = "Administración";
const ADMIN_CONTACT_EMAIL: &str = "info@clubpadel.com";

// ── DepositSettings ───────────────────────────────────────────────────────────

/// Process-wide deposit policy: the advance-payment ratio, the human-readable
/// policy text shown to players, and whether automatic reminders are on.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositSettings {
    deposit_percentage: f64,
    pub deposit_policy: String,
    pub auto_reminders: bool,
}

impl DepositSettings {
    /// Ratio of the total price charged as deposit, always in `[0, 1]`.
    #[inline]
    pub fn deposit_percentage(&self) -> f64 {
        self.deposit_percentage
    }

    /// Update the deposit ratio, clamping to `[0, 1]`.
    pub fn set_deposit_percentage(&mut self, percentage: f64) {
        self.deposit_percentage = percentage.clamp(0.0, 1.0);
    }
}

impl Default for DepositSettings {
    fn default() -> Self {
        Self {
            deposit_percentage: 0.30,
            deposit_policy: "La seña equivale al 30% del valor del turno. Si cancelás con más \
                             de 24 horas de anticipación, se reintegra el 100%. Pasado ese \
                             plazo, la seña se pierde."
                .to_owned(),
            auto_reminders: true,
        }
    }
}

// ── Payloads ──────────────────────────────────────────────────────────────────

/// A user-submitted booking draft.  The store derives everything else:
/// end time, price, deposit, status, id, and timestamps.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewReservation {
    pub court_id:         CourtId,
    pub date:             NaiveDate,
    pub start:            TimeOfDay,
    pub duration_minutes: u32,
    pub players:          Vec<String>,
    pub contact_name:     String,
    pub contact_email:    String,
    pub notes:            Option<String>,
    /// Pay the deposit at booking time → the reservation starts `Confirmed`.
    pub pay_deposit:      bool,
}

/// An administrative slot-blocking request.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockRequest {
    pub court_id: CourtId,
    pub date:     NaiveDate,
    pub start:    TimeOfDay,
    pub end:      TimeOfDay,
    pub reason:   Option<String>,
    /// Number of weekly occurrences including `date` itself; `1` blocks a
    /// single slot, `3` blocks the same slot this week and the next two.
    pub repeat_weeks: u32,
}

// ── ReservationStore ──────────────────────────────────────────────────────────

/// Single-writer owner of courts, reservations, and deposit settings.
pub struct ReservationStore {
    courts:       Vec<Court>,
    reservations: Vec<Reservation>,
    settings:     DepositSettings,
    clock:        Box<dyn Clock>,
    rng:          SmallRng,
}

impl ReservationStore {
    /// A store over the given court list, using the system clock.
    pub fn new(courts: Vec<Court>) -> Self {
        Self::with_clock(courts, Box::new(SystemClock), rand::random())
    }

    /// A store with an explicit clock and RNG seed — the test constructor.
    pub fn with_clock(courts: Vec<Court>, clock: Box<dyn Clock>, rng_seed: u64) -> Self {
        Self {
            courts,
            reservations: Vec::new(),
            settings: DepositSettings::default(),
            clock,
            rng: SmallRng::seed_from_u64(rng_seed),
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// The court list (reference data, never mutated after construction).
    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    pub fn court(&self, id: &CourtId) -> Option<&Court> {
        self.courts.iter().find(|c| c.id == *id)
    }

    /// Full snapshot of the reservation collection.  The returned vector is
    /// a copy; mutating it never touches the store.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.clone()
    }

    /// Look up a single reservation by id.
    pub fn reservation(&self, id: &ReservationId) -> EngineResult<Reservation> {
        self.reservations
            .iter()
            .find(|r| r.id == *id)
            .cloned()
            .ok_or_else(|| EngineError::ReservationNotFound(id.clone()))
    }

    pub fn settings(&self) -> &DepositSettings {
        &self.settings
    }

    // ── Pricing ───────────────────────────────────────────────────────────

    /// Total price for `duration_minutes` on the given court, rounded to
    /// whole currency units.
    pub fn price_for(&self, court_id: &CourtId, duration_minutes: u32) -> EngineResult<i64> {
        let court = self
            .court(court_id)
            .ok_or_else(|| EngineError::CourtNotFound(court_id.clone()))?;
        Ok(((duration_minutes as f64 / 60.0) * court.price_per_hour as f64).round() as i64)
    }

    /// Deposit owed on `total_price` under the current percentage.
    pub fn deposit_for(&self, total_price: i64) -> i64 {
        (total_price as f64 * self.settings.deposit_percentage).round() as i64
    }

    // ── Settings ──────────────────────────────────────────────────────────

    pub fn set_deposit_percentage(&mut self, percentage: f64) {
        self.settings.set_deposit_percentage(percentage);
        debug!(percentage = self.settings.deposit_percentage(), "deposit percentage updated");
    }

    pub fn set_deposit_policy(&mut self, policy: impl Into<String>) {
        self.settings.deposit_policy = policy.into();
    }

    pub fn set_auto_reminders(&mut self, enabled: bool) {
        self.settings.auto_reminders = enabled;
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Insert a fully built record after validation and conflict checking.
    pub fn add_reservation(&mut self, reservation: Reservation) -> EngineResult<()> {
        self.validate(&reservation)?;
        self.reject_if_taken(&reservation)?;
        debug!(id = %reservation.id, court = %reservation.court_id, date = %reservation.date,
               "reservation added");
        self.reservations.push(reservation);
        Ok(())
    }

    /// Build and insert a reservation from a user-submitted draft.
    ///
    /// Returns the created record (with generated id, derived price/deposit,
    /// and creation timestamp).
    pub fn create_reservation(&mut self, draft: NewReservation) -> EngineResult<Reservation> {
        let court = self
            .court(&draft.court_id)
            .ok_or_else(|| EngineError::CourtNotFound(draft.court_id.clone()))?
            .clone();
        if draft.duration_minutes == 0 {
            return Err(EngineError::Validation("duration must be positive".into()));
        }
        let end = draft.start.checked_add(draft.duration_minutes).ok_or_else(|| {
            EngineError::Validation(format!(
                "booking of {} min starting at {} runs past closing time",
                draft.duration_minutes, draft.start
            ))
        })?;

        let total_price = self.price_for(&draft.court_id, draft.duration_minutes)?;
        let deposit = self.deposit_for(total_price);
        let reservation = Reservation {
            id: self.next_id(),
            court_id: draft.court_id,
            court_name: court.name,
            date: draft.date,
            start: draft.start,
            end,
            duration_minutes: draft.duration_minutes,
            players: draft.players,
            contact_name: draft.contact_name,
            contact_email: draft.contact_email,
            notes: draft.notes,
            total_price,
            deposit,
            deposit_paid: draft.pay_deposit,
            status: if draft.pay_deposit {
                ReservationStatus::Confirmed
            } else {
                ReservationStatus::Pending
            },
            reminders_sent: false,
            created_at: self.clock.now(),
            updated_at: None,
            fixed_turn: false,
        };
        self.add_reservation(reservation.clone())?;
        Ok(reservation)
    }

    /// Append seed records, checking ids and shape but *not* double-booking:
    /// imported history may legitimately contain the collisions that
    /// conflict detection exists to report.
    pub fn seed_reservations(&mut self, records: Vec<Reservation>) -> EngineResult<()> {
        for reservation in records {
            self.validate(&reservation)?;
            self.reservations.push(reservation);
        }
        Ok(())
    }

    // ── Status changes ────────────────────────────────────────────────────

    pub fn update_status(&mut self, id: &ReservationId, status: ReservationStatus) -> EngineResult<()> {
        self.update(id, |r| r.status = status)
    }

    /// Soft-withdraw: the record stays, the slot frees up.
    pub fn cancel_reservation(&mut self, id: &ReservationId) -> EngineResult<()> {
        self.update(id, |r| r.status = ReservationStatus::Cancelled)
    }

    /// Register the deposit payment; a pending booking becomes confirmed.
    pub fn mark_deposit_paid(&mut self, id: &ReservationId) -> EngineResult<()> {
        self.update(id, |r| {
            r.deposit_paid = true;
            r.status = ReservationStatus::Confirmed;
        })
    }

    pub fn mark_completed(&mut self, id: &ReservationId) -> EngineResult<()> {
        self.update(id, |r| r.status = ReservationStatus::Completed)
    }

    pub fn toggle_reminder(&mut self, id: &ReservationId, reminders_sent: bool) -> EngineResult<()> {
        self.update(id, |r| r.reminders_sent = reminders_sent)
    }

    /// Hard delete.  Returns the removed record.
    pub fn remove(&mut self, id: &ReservationId) -> EngineResult<Reservation> {
        let idx = self
            .reservations
            .iter()
            .position(|r| r.id == *id)
            .ok_or_else(|| EngineError::ReservationNotFound(id.clone()))?;
        let removed = self.reservations.remove(idx);
        debug!(id = %removed.id, "reservation removed");
        Ok(removed)
    }

    // ── Slot blocking ─────────────────────────────────────────────────────

    /// Withhold a court slot from booking, optionally repeating weekly.
    ///
    /// Each candidate week is checked against the current collection —
    /// including blocks already placed earlier in this same call — and
    /// skipped if its interval is taken.  The operation never fails on
    /// conflict; it returns however many occurrences could be placed
    /// (possibly none).
    pub fn block_slot(&mut self, request: BlockRequest) -> EngineResult<Vec<Reservation>> {
        let court = self
            .court(&request.court_id)
            .ok_or_else(|| EngineError::CourtNotFound(request.court_id.clone()))?
            .clone();
        if request.end <= request.start {
            return Err(EngineError::Validation(format!(
                "block interval {}-{} is empty or inverted",
                request.start, request.end
            )));
        }

        let weeks = request.repeat_weeks.max(1);
        let fixed_turn = weeks > 1;
        let mut created = Vec::new();

        for week in 0..weeks {
            let date = request.date + Days::new(7 * week as u64);
            let block = Reservation {
                id: self.next_id(),
                court_id: request.court_id.clone(),
                court_name: court.name.clone(),
                date,
                start: request.start,
                end: request.end,
                duration_minutes: request.end.since(request.start),
                players: Vec::new(),
                contact_name: ADMIN_CONTACT_NAME.to_owned(),
                contact_email: ADMIN_CONTACT_EMAIL.to_owned(),
                notes: request.reason.clone(),
                total_price: 0,
                deposit: 0,
                deposit_paid: true,
                status: ReservationStatus::Blocked,
                reminders_sent: false,
                created_at: self.clock.now(),
                updated_at: None,
                fixed_turn,
            };

            // Earlier occurrences from this batch are already in the
            // collection, so one check covers both store and batch.
            if self.reject_if_taken(&block).is_err() {
                debug!(court = %block.court_id, %date, "skipping blocked week: slot taken");
                continue;
            }
            self.reservations.push(block.clone());
            created.push(block);
        }

        debug!(requested = weeks, placed = created.len(), "slot block applied");
        Ok(created)
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Locate by id, apply a partial update, stamp `updated_at`.
    fn update(
        &mut self,
        id: &ReservationId,
        apply: impl FnOnce(&mut Reservation),
    ) -> EngineResult<()> {
        let now = self.clock.now();
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or_else(|| EngineError::ReservationNotFound(id.clone()))?;
        apply(reservation);
        reservation.updated_at = Some(now);
        debug!(id = %id, status = %reservation.status, "reservation updated");
        Ok(())
    }

    /// Shape checks shared by every insertion path.
    fn validate(&self, reservation: &Reservation) -> EngineResult<()> {
        if self.reservations.iter().any(|r| r.id == reservation.id) {
            return Err(EngineError::DuplicateId(reservation.id.clone()));
        }
        if self.court(&reservation.court_id).is_none() {
            return Err(EngineError::CourtNotFound(reservation.court_id.clone()));
        }
        if reservation.end <= reservation.start {
            return Err(EngineError::Validation(format!(
                "end {} must be after start {}",
                reservation.end, reservation.start
            )));
        }
        if reservation.duration_minutes != reservation.end.since(reservation.start) {
            return Err(EngineError::Validation(format!(
                "duration {} min does not match interval {}-{}",
                reservation.duration_minutes, reservation.start, reservation.end
            )));
        }
        Ok(())
    }

    /// The double-booking gate: any non-cancelled record overlapping the
    /// candidate's interval on the same court and date rejects it.
    fn reject_if_taken(&self, candidate: &Reservation) -> EngineResult<()> {
        let taken = self
            .reservations
            .iter()
            .filter(|r| r.status.occupies_court())
            .any(|r| r.overlaps(candidate));
        if taken {
            return Err(EngineError::SlotTaken {
                court: candidate.court_id.clone(),
                date:  candidate.date,
                start: candidate.start,
                end:   candidate.end,
            });
        }
        Ok(())
    }

    /// Generate a reservation id: creation millis plus a random suffix.
    fn next_id(&mut self) -> ReservationId {
        let millis = self.clock.now().and_utc().timestamp_millis();
        ReservationId::new(format!("res_{millis}_{:04}", self.rng.gen_range(0..10_000)))
    }
}
