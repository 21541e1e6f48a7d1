//! Geographic position type.

use super::error::{Axis, InvalidCoordinate};

/// A latitude/longitude pair in decimal degrees.
///
/// No bounds are enforced: a latitude of 123.0 is carried through to the
/// distance calculation as-is.
///
/// # Examples
///
/// ```
/// use next_train::domain::Coordinate;
///
/// let here = Coordinate::parse("-37.9110", "145.0380").unwrap();
/// assert_eq!(here.latitude, -37.911);
///
/// assert!(Coordinate::parse("south", "145.0").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from already-numeric degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a coordinate from decimal-degree strings, as sent in request
    /// headers.
    ///
    /// Surrounding whitespace is ignored. `NaN` and infinities are accepted
    /// and flow through to the distance calculation.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, InvalidCoordinate> {
        Ok(Self {
            latitude: parse_degrees(latitude, Axis::Latitude)?,
            longitude: parse_degrees(longitude, Axis::Longitude)?,
        })
    }
}

fn parse_degrees(value: &str, axis: Axis) -> Result<f64, InvalidCoordinate> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InvalidCoordinate::Unparseable {
            axis,
            value: value.to_string(),
        })
}
