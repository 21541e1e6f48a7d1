//! The static stop catalog.
//!
//! The catalog is a JSON object keyed by stop name:
//!
//! ```json
//! {
//!   "McKinnon": {
//!     "name": "McKinnon", "latitude": -37.9110, "longitude": 145.0380,
//!     "type": 0, "id": 1119, "route": 6, "direction": 1
//!   }
//! }
//! ```
//!
//! Key order in the file is preserved and is the order the resolver scans.

use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Deserialize;

use crate::domain::StopRecord;

use super::error::CatalogError;

/// Catalog entry as it appears on disk.
#[derive(Debug, Deserialize)]
struct StopDto {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(rename = "type")]
    route_type: Identifier,
    id: Identifier,
    route: Identifier,
    direction: Identifier,
}

/// Upstream identifiers appear both quoted and bare in hand-maintained
/// catalogs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Identifier {
    Text(String),
    Number(serde_json::Number),
}

impl Identifier {
    fn into_string(self) -> String {
        match self {
            Identifier::Text(s) => s,
            Identifier::Number(n) => n.to_string(),
        }
    }
}

impl From<StopDto> for StopRecord {
    fn from(dto: StopDto) -> Self {
        Self {
            name: dto.name,
            latitude: dto.latitude,
            longitude: dto.longitude,
            stop_id: dto.id.into_string(),
            route_type: dto.route_type.into_string(),
            route_id: dto.route.into_string(),
            direction_id: dto.direction.into_string(),
        }
    }
}

/// Read-only, ordered stop lookup.
///
/// Never empty. Loaded once and shared between requests.
#[derive(Debug, Clone)]
pub struct StopCatalog {
    stops: IndexMap<String, StopRecord>,
}

impl StopCatalog {
    /// Build a catalog from records, keyed by each record's name.
    pub fn new(records: impl IntoIterator<Item = StopRecord>) -> Result<Self, CatalogError> {
        let mut stops = IndexMap::new();
        for record in records {
            match stops.entry(record.name.clone()) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateName(record.name)),
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }
        Self::from_map(stops)
    }

    /// Parse a catalog from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: IndexMap<String, StopDto> = serde_json::from_str(json)?;
        let stops = raw
            .into_iter()
            .map(|(key, dto)| (key, StopRecord::from(dto)))
            .collect();
        Self::from_map(stops)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    fn from_map(stops: IndexMap<String, StopRecord>) -> Result<Self, CatalogError> {
        if stops.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { stops })
    }

    /// Look up a stop by its catalog key.
    pub fn get(&self, key: &str) -> Option<&StopRecord> {
        self.stops.get(key)
    }

    /// Iterate `(key, stop)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StopRecord)> {
        self.stops.iter().map(|(key, stop)| (key.as_str(), stop))
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
