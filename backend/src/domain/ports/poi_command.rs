//! Driving port for POI lifecycle use-cases.

use async_trait::async_trait;

use crate::domain::{Error, Poi, PoiDraft, PoiId, PoiPatch};

/// Write-side use-cases exposed to inbound adapters.
#[async_trait]
pub trait PoiCommand: Send + Sync {
    /// Validate and store a new POI.
    async fn create(&self, draft: PoiDraft) -> Result<Poi, Error>;

    /// Apply a partial update to an existing POI.
    async fn update(&self, id: PoiId, patch: PoiPatch) -> Result<Poi, Error>;

    /// Soft-delete a POI. Already inactive records are accepted.
    async fn delete(&self, id: PoiId) -> Result<(), Error>;
}
