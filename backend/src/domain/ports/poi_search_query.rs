//! Driving port for POI read use-cases.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{CategoryListingRequest, Error, NearbyPoi, NearbySearchRequest, Poi};

/// Read-side use-cases exposed to inbound adapters.
#[async_trait]
pub trait PoiSearchQuery: Send + Sync {
    /// Active POIs within the request radius, nearest first.
    async fn nearby(&self, request: NearbySearchRequest) -> Result<Vec<NearbyPoi>, Error>;

    /// One page of active POIs in a category, ordered by id.
    async fn by_category(&self, request: CategoryListingRequest) -> Result<Page<Poi>, Error>;

    /// Every active POI, ordered by id.
    async fn all_active(&self) -> Result<Vec<Poi>, Error>;
}
