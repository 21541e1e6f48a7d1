//! Stop records from the static catalog.

use super::Coordinate;

/// A platform/direction entry the service can fetch departures for.
///
/// The identifiers are kept as the strings the timetable API expects in
/// request paths.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    /// Human-readable station name, used in every message.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Upstream stop identifier.
    pub stop_id: String,
    /// Upstream route type (0 is metropolitan train).
    pub route_type: String,
    /// The single route served from this stop.
    pub route_id: String,
    /// Direction of travel on that route.
    pub direction_id: String,
}

impl StopRecord {
    /// Position of the stop.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// The outcome of a nearest-stop lookup: a catalog stop and how far away it
/// is.
///
/// Borrowed from the catalog; lives for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStop<'a> {
    pub stop: &'a StopRecord,
    pub distance_km: f64,
}
