//! Domain error types.
//!
//! These errors represent validation failures of caller input. They are
//! distinct from upstream API and configuration errors.

use std::fmt;

/// Which half of a coordinate pair failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Error returned when a caller's position cannot be read as decimal degrees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCoordinate {
    /// The value was not supplied at all
    #[error("missing {0}")]
    Missing(Axis),

    /// The value was supplied but is not a decimal number
    #[error("invalid {axis} {value:?}: expected decimal degrees")]
    Unparseable { axis: Axis, value: String },
}
