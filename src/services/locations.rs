use crate::models::{DraftLocation, Location};
use crate::services::store::{StoreClient, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur in the location service
///
/// Handlers pattern-match on this instead of catching a generic failure, so
/// the service boundary stays an explicit `Result`.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("document store error: {0}")]
    Store(#[from] StoreError),
}

/// CRUD façade over the locations collection
///
/// The store client is constructed once at process start and injected here;
/// there is no lazily-connected global. The service mints every cuid, so a
/// client-supplied identifier can never reach the store.
pub struct LocationService {
    store: Arc<StoreClient>,
}

impl LocationService {
    /// Create a new location service backed by the given store client
    pub fn new(store: Arc<StoreClient>) -> Self {
        Self { store }
    }

    /// Persist a draft under a freshly minted cuid
    ///
    /// Returns the created record's public fields only.
    pub async fn create_location(&self, draft: DraftLocation) -> Result<Location, LocationError> {
        let cuid = cuid2::create_id();

        let created = self.store.insert_location(&cuid, &draft).await?;

        tracing::debug!("Created location {} ({})", created.cuid, created.name);

        Ok(created)
    }

    /// Return all saved locations
    pub async fn get_locations(&self) -> Result<Vec<Location>, LocationError> {
        let locations = self.store.list_locations().await?;

        Ok(locations)
    }

    /// Delete the location with the given cuid
    ///
    /// Deleting a cuid that matches nothing is success, not an error.
    pub async fn delete_location(&self, cuid: &str) -> Result<(), LocationError> {
        self.store.delete_location(cuid).await?;

        tracing::debug!("Deleted location {}", cuid);

        Ok(())
    }

    /// Whether the underlying store answers its health probe
    pub async fn store_healthy(&self) -> bool {
        self.store.health().await
    }
}
