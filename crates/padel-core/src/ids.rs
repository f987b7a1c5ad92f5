//! Strongly typed identifier wrappers.
//!
//! Reservation and court ids come from the booking front end as opaque
//! strings (`"c1"`, `"res_1714298400000_0421"`, UUIDs), so the wrappers hold
//! a `String` rather than an integer.  All ids are `Ord + Hash` so they can
//! be used as map keys and sorted collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around an owned string.
macro_rules! typed_str_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_str_id! {
    /// Identifier of a court in the club's reference data.
    pub struct CourtId;
}

typed_str_id! {
    /// Unique identifier of a reservation record.
    pub struct ReservationId;
}
