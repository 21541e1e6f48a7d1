//! Departure board entries.

use chrono::{DateTime, Utc};

/// One upcoming (or just departed) train on a departure board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureEntry {
    /// Best known departure time, in UTC.
    pub departure_utc: DateTime<Utc>,
    /// Platform, when the operator has published one. Never empty.
    pub platform: Option<String>,
}

impl DepartureEntry {
    /// Create an entry, discarding blank platform strings.
    pub fn new(departure_utc: DateTime<Utc>, platform: Option<String>) -> Self {
        let platform = platform
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        Self {
            departure_utc,
            platform,
        }
    }
}

/// Departures for one stop, route and direction, in the order the upstream
/// service returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartureBoard {
    entries: Vec<DepartureEntry>,
}

impl DepartureBoard {
    pub fn new(entries: Vec<DepartureEntry>) -> Self {
        Self { entries }
    }

    /// The next train, if any.
    pub fn first(&self) -> Option<&DepartureEntry> {
        self.entries.first()
    }

    /// The train after the next one, if any.
    pub fn second(&self) -> Option<&DepartureEntry> {
        self.entries.get(1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
