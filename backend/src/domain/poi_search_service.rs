//! Proximity search pipeline.
//!
//! A nearby search runs validate, fetch, re-filter, measure, cut at the
//! radius, rank, and page. Validation happens when the request value is
//! built, so by the time the service runs the request is known to be sound.
//! The store is asked for candidates once per call and its snapshot is never
//! mutated.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Page;
use tracing::{debug, instrument, warn};

use crate::domain::ports::{
    CandidateFilter, PoiCandidateSource, PoiRepositoryError, PoiSearchQuery,
};
use crate::domain::{CategoryListingRequest, Error, NearbyPoi, NearbySearchRequest, Poi};

pub(crate) fn map_repository_error(error: PoiRepositoryError) -> Error {
    warn!(%error, "poi store call failed");
    match error {
        PoiRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("poi store unavailable: {message}"))
        }
        PoiRepositoryError::Query { message } => {
            Error::internal(format!("poi store error: {message}"))
        }
    }
}

/// Rank candidates for a nearby search.
///
/// Re-applies the active/category filter, keeps candidates with
/// `distance <= radius`, orders by distance then id, and applies the
/// request's offset and limit.
pub fn rank_candidates(request: &NearbySearchRequest, candidates: Vec<Poi>) -> Vec<NearbyPoi> {
    let filter = CandidateFilter::active(request.category());
    let origin = request.origin();
    let radius = request.radius_metres();

    let mut within_radius: Vec<NearbyPoi> = candidates
        .into_iter()
        .filter(|poi| filter.matches(poi))
        .map(|poi| {
            let distance = origin.distance_to(poi.coordinate());
            NearbyPoi::new(poi, distance)
        })
        .filter(|entry| entry.distance_metres() <= radius)
        .collect();

    within_radius.sort_by(|left, right| {
        left.distance_metres()
            .total_cmp(&right.distance_metres())
            .then_with(|| left.poi().id().cmp(&right.poi().id()))
    });

    request.page().apply(within_radius).collect()
}

fn active_sorted_by_id(filter: CandidateFilter, candidates: Vec<Poi>) -> Vec<Poi> {
    let mut matching: Vec<Poi> = candidates
        .into_iter()
        .filter(|poi| filter.matches(poi))
        .collect();
    matching.sort_by_key(Poi::id);
    matching
}

/// Search service implementing the read-side driving port.
#[derive(Clone)]
pub struct PoiSearchService<S> {
    source: Arc<S>,
}

impl<S> PoiSearchService<S> {
    /// Create a search service over a candidate source.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> PoiSearchService<S>
where
    S: PoiCandidateSource,
{
    async fn fetch(&self, filter: CandidateFilter) -> Result<Vec<Poi>, Error> {
        self.source
            .fetch_candidates(filter)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<S> PoiSearchQuery for PoiSearchService<S>
where
    S: PoiCandidateSource,
{
    #[instrument(skip(self), level = "debug")]
    async fn nearby(&self, request: NearbySearchRequest) -> Result<Vec<NearbyPoi>, Error> {
        let candidates = self
            .fetch(CandidateFilter::active(request.category()))
            .await?;
        let candidate_count = candidates.len();
        let ranked = rank_candidates(&request, candidates);
        debug!(candidate_count, returned = ranked.len(), "nearby search ranked");
        Ok(ranked)
    }

    #[instrument(skip(self), level = "debug")]
    async fn by_category(&self, request: CategoryListingRequest) -> Result<Page<Poi>, Error> {
        let filter = CandidateFilter::active(Some(request.category()));
        let candidates = self.fetch(filter).await?;
        Ok(request
            .page()
            .paginate(active_sorted_by_id(filter, candidates)))
    }

    #[instrument(skip(self), level = "debug")]
    async fn all_active(&self) -> Result<Vec<Poi>, Error> {
        let filter = CandidateFilter::active(None);
        let candidates = self.fetch(filter).await?;
        Ok(active_sorted_by_id(filter, candidates))
    }
}

#[cfg(test)]
#[path = "poi_search_service_tests.rs"]
mod tests;
