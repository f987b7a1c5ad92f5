//! Engine error type.
//!
//! One enum serves the whole workspace: the taxonomy is small (lookup
//! failures, malformed input, a rejected double-booking, and loader
//! parse/I/O) and every `padel-*` crate speaks it, so per-crate error enums
//! would only add conversion noise.

use chrono::NaiveDate;
use thiserror::Error;

use crate::time::TimeOfDay;
use crate::{CourtId, ReservationId};

/// The top-level error type for all `padel-*` crates.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("reservation {0} not found")]
    ReservationNotFound(ReservationId),

    #[error("court {0} not found")]
    CourtNotFound(CourtId),

    #[error("reservation {0} already exists")]
    DuplicateId(ReservationId),

    #[error("validation error: {0}")]
    Validation(String),

    /// Creation consulted conflict detection and found the interval occupied.
    #[error("court {court} is already taken on {date} between {start} and {end}")]
    SlotTaken {
        court: CourtId,
        date:  NaiveDate,
        start: TimeOfDay,
        end:   TimeOfDay,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `padel-*` crates.
pub type EngineResult<T> = Result<T, EngineError>;
