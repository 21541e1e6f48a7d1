//! Geospatial lookup: the stop catalog, great-circle distance, and the
//! nearest-stop resolver built on both.

mod catalog;
mod distance;
mod error;
mod resolver;

pub use catalog::StopCatalog;
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use error::CatalogError;
pub use resolver::NearestStopResolver;
