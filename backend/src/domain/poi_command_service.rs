//! POI lifecycle service.
//!
//! Creates, patches, and soft-deletes records through [`PoiRepository`].
//! Deleting never removes a record; it clears the active flag so the record
//! drops out of every search.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, instrument};

use crate::domain::poi_search_service::map_repository_error;
use crate::domain::ports::{PoiCommand, PoiRepository};
use crate::domain::{Error, Poi, PoiDraft, PoiId, PoiPatch, PoiValidationError};

fn map_validation_error(error: PoiValidationError) -> Error {
    Error::invalid_field(error.field(), error.to_string())
}

fn not_found(id: PoiId) -> Error {
    Error::not_found(format!("Point of Interest with ID {id} not found"))
}

/// Command service implementing the write-side driving port.
#[derive(Clone)]
pub struct PoiCommandService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> PoiCommandService<R> {
    /// Create a command service over a repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use poi_finder::domain::PoiCommandService;
    /// use poi_finder::outbound::memory::InMemoryPoiStore;
    ///
    /// let store = Arc::new(InMemoryPoiStore::default());
    /// let _service = PoiCommandService::new(store, Arc::new(DefaultClock));
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

impl<R> PoiCommandService<R>
where
    R: PoiRepository,
{
    async fn load(&self, id: PoiId) -> Result<Poi, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn store(&self, poi: &Poi) -> Result<(), Error> {
        self.repo.save(poi).await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> PoiCommand for PoiCommandService<R>
where
    R: PoiRepository,
{
    #[instrument(skip(self, draft), fields(name = %draft.name), level = "debug")]
    async fn create(&self, draft: PoiDraft) -> Result<Poi, Error> {
        draft.validate().map_err(map_validation_error)?;
        let id = self.repo.next_id().await.map_err(map_repository_error)?;
        let poi = Poi::new(id, draft, self.clock.utc()).map_err(map_validation_error)?;
        self.store(&poi).await?;
        info!(id = %poi.id(), category = %poi.category(), "poi created");
        Ok(poi)
    }

    #[instrument(skip(self, patch), level = "debug")]
    async fn update(&self, id: PoiId, patch: PoiPatch) -> Result<Poi, Error> {
        let current = self.load(id).await?;
        let updated = current
            .with_patch(patch, self.clock.utc())
            .map_err(map_validation_error)?;
        self.store(&updated).await?;
        info!(%id, "poi updated");
        Ok(updated)
    }

    #[instrument(skip(self), level = "debug")]
    async fn delete(&self, id: PoiId) -> Result<(), Error> {
        let current = self.load(id).await?;
        self.store(&current.deactivated(self.clock.utc())).await?;
        info!(%id, "poi deactivated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "poi_command_service_tests.rs"]
mod tests;
