//! Court reference data.

use crate::CourtId;

/// One playable court.
///
/// Reference data: created when the store is initialised and never mutated
/// by booking operations.  Prices are whole currency units per hour (the
/// club bills in pesos, no cents).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Court {
    pub id:             CourtId,
    pub name:           String,
    pub description:    String,
    pub price_per_hour: i64,
    pub indoor:         bool,
    pub has_lights:     bool,
}
