//! `padel-store` — the authoritative in-memory reservation collection.
//!
//! # Ownership model
//!
//! One [`ReservationStore`] owns the canonical court list, reservation
//! collection, and deposit settings.  All mutation funnels through its
//! methods (single-writer); reads hand out cloned snapshots that callers
//! must treat as immutable.  There is no notification machinery here —
//! views in `padel-views` are pure functions over a snapshot, and a
//! presentation layer wanting push updates wraps the store at its own
//! boundary.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`clock`]  | `Clock` trait, `SystemClock`, `FixedClock`                |
//! | [`store`]  | `ReservationStore`, `NewReservation`, `BlockRequest`,     |
//! |            | `DepositSettings`                                         |
//! | [`loader`] | `load_reservations_csv`, `load_reservations_reader`       |
//! | [`seed`]   | demo fixture courts and reservations                      |

pub mod clock;
pub mod loader;
pub mod seed;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use loader::{load_reservations_csv, load_reservations_reader};
pub use store::{BlockRequest, DepositSettings, NewReservation, ReservationStore};
