//! Nearest-stop lookup.

use std::sync::Arc;

use tracing::trace;

use crate::domain::{Coordinate, ResolvedStop, StopRecord};

use super::catalog::StopCatalog;
use super::distance::haversine_km;
use super::error::CatalogError;

/// Finds the catalog stop closest to a caller.
///
/// The scan is seeded with a well-known stop, so a lookup always produces
/// exactly one answer. Stops are visited in catalog order and only a
/// strictly closer stop replaces the current best, so the earliest of
/// several equidistant stops wins.
#[derive(Debug, Clone)]
pub struct NearestStopResolver {
    catalog: Arc<StopCatalog>,
    seed: StopRecord,
}

impl NearestStopResolver {
    /// Create a resolver seeded with the stop stored under `seed` in the
    /// catalog.
    pub fn new(catalog: Arc<StopCatalog>, seed: &str) -> Result<Self, CatalogError> {
        let seed = catalog
            .get(seed)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownSeed(seed.to_string()))?;
        Ok(Self { catalog, seed })
    }

    pub fn catalog(&self) -> &StopCatalog {
        &self.catalog
    }

    /// Resolve the stop nearest to `origin`.
    pub fn resolve(&self, origin: Coordinate) -> ResolvedStop<'_> {
        let seed = ResolvedStop {
            stop: &self.seed,
            distance_km: haversine_km(origin, self.seed.coordinate()),
        };
        trace!(
            seed = %self.seed.name,
            distance_km = round2(seed.distance_km),
            "initial distance from seed stop"
        );

        let nearest = self.catalog.iter().fold(seed, |best, (_, stop)| {
            let distance_km = haversine_km(origin, stop.coordinate());
            trace!(stop = %stop.name, distance_km = round2(distance_km), "scanned stop");
            if distance_km < best.distance_km {
                ResolvedStop { stop, distance_km }
            } else {
                best
            }
        });

        trace!(
            stop = %nearest.stop.name,
            distance_km = round2(nearest.distance_km),
            "closest stop"
        );
        nearest
    }
}

fn round2(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
