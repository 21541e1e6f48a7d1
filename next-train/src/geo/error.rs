//! Stop catalog error types.

use std::path::PathBuf;

/// Errors that can occur while loading or querying the stop catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read stop catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog is not valid JSON of the expected shape
    #[error("failed to parse stop catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog has no stops at all
    #[error("stop catalog is empty")]
    Empty,

    /// Two records share a name
    #[error("duplicate stop name in catalog: {0}")]
    DuplicateName(String),

    /// The configured seed stop is not in the catalog
    #[error("seed stop {0:?} is not in the catalog")]
    UnknownSeed(String),
}
