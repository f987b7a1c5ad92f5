//! `padel-core` — foundational types for the padel scheduling engine.
//!
//! This crate is a dependency of every other `padel-*` crate.  It intentionally
//! has no `padel-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CourtId`, `ReservationId`                            |
//! | [`time`]        | `TimeOfDay`, `TimeRange`, week/day calendar helpers   |
//! | [`court`]       | `Court` reference record                              |
//! | [`reservation`] | `Reservation`, `ReservationStatus`                    |
//! | [`error`]       | `EngineError`, `EngineResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod court;
pub mod error;
pub mod ids;
pub mod reservation;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use court::Court;
pub use error::{EngineError, EngineResult};
pub use ids::{CourtId, ReservationId};
pub use reservation::{Reservation, ReservationStatus};
pub use time::{combine, week_start, TimeOfDay, TimeRange};
