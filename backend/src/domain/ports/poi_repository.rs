//! Driven ports for reading and persisting POI records.
//!
//! The search pipeline only needs [`PoiCandidateSource`]; the CRUD service
//! uses [`PoiRepository`]. A single adapter usually implements both.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Poi, PoiCategory, PoiId};

/// Pre-filter requested from the store when fetching candidates.
///
/// Adapters should honour it, but callers re-check every returned record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidateFilter {
    /// Only return records whose active flag is set.
    pub active_only: bool,
    /// Only return records tagged with this category.
    pub category: Option<PoiCategory>,
}

impl CandidateFilter {
    /// Active records, optionally restricted to one category.
    pub const fn active(category: Option<PoiCategory>) -> Self {
        Self {
            active_only: true,
            category,
        }
    }

    /// Whether `poi` satisfies this filter.
    pub fn matches(&self, poi: &Poi) -> bool {
        (!self.active_only || poi.is_active())
            && self.category.is_none_or(|category| poi.category() == category)
    }
}

define_port_error! {
    /// Errors raised by POI store adapters.
    pub enum PoiRepositoryError {
        /// Store could not be reached.
        Connection { message: String } =>
            "poi store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "poi store query failed: {message}",
    }
}

/// Read-only source of search candidates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PoiCandidateSource: Send + Sync {
    /// Snapshot of records matching `filter`. Returned records are not
    /// mutated by the caller.
    async fn fetch_candidates(
        &self,
        filter: CandidateFilter,
    ) -> Result<Vec<Poi>, PoiRepositoryError>;
}

/// Record lifecycle operations owned by the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PoiRepository: Send + Sync {
    /// Reserve a fresh identifier. Identifiers are never handed out twice.
    async fn next_id(&self) -> Result<PoiId, PoiRepositoryError>;

    /// Insert or replace the record stored under `poi.id()`.
    async fn save(&self, poi: &Poi) -> Result<(), PoiRepositoryError>;

    /// Fetch a record regardless of its active flag.
    async fn find_by_id(&self, id: PoiId) -> Result<Option<Poi>, PoiRepositoryError>;
}
