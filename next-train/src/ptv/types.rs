//! PTV Timetable API response DTOs.
//!
//! These types map directly to the `/v3/departures` JSON response. They use
//! `Option` liberally because PTV sends `null` for anything it does not
//! know, and older or trimmed responses omit fields entirely.

use serde::Deserialize;

/// Response from `/v3/departures/route_type/{}/stop/{}/route/{}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    /// Departures in the order PTV chose (soonest first).
    pub departures: Option<Vec<DepartureDto>>,
}

/// One departure on the board.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureDto {
    /// Timetabled departure time (ISO 8601, UTC).
    pub scheduled_departure_utc: Option<String>,

    /// Real-time estimate (ISO 8601, UTC). `null` when no live data.
    pub estimated_departure_utc: Option<String>,

    /// Platform number, e.g. "2" or "1A".
    pub platform_number: Option<String>,
}
