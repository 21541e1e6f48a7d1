//! Application state for the web layer.

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::geo::{CatalogError, NearestStopResolver, StopCatalog};
use crate::handler::NextTrain;
use crate::ptv::{PtvClient, PtvError};

/// Errors preventing the service from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to create PTV client: {0}")]
    Client(#[from] PtvError),
}

/// Shared application state.
///
/// Everything in here is immutable after startup, so concurrent requests
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Request orchestrator over the live PTV client
    pub next_train: Arc<NextTrain<PtvClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(next_train: NextTrain<PtvClient>) -> Self {
        Self {
            next_train: Arc::new(next_train),
        }
    }

    /// Load the catalog and build the client described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let catalog = StopCatalog::load(&config.catalog_path)?;
        info!(
            stops = catalog.len(),
            path = %config.catalog_path.display(),
            "loaded stop catalog"
        );

        let resolver = NearestStopResolver::new(Arc::new(catalog), &config.seed_stop)?;
        let client = PtvClient::new(config.ptv.clone())?;
        let next_train = NextTrain::new(resolver, client, config.timezone)
            .with_max_distance_km(config.max_distance_km);

        Ok(Self::new(next_train))
    }
}
