//! Process-local POI store.
//!
//! Records live in an ordered map keyed by id, so snapshots come back in id
//! order. Identifiers come from a counter that only moves forward; a soft
//! deleted record keeps its id for good.

mod seed;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use self::seed::{SeedFileError, load_seed_file};
use crate::domain::ports::{
    CandidateFilter, PoiCandidateSource, PoiRepository, PoiRepositoryError,
};
use crate::domain::{Poi, PoiDraft, PoiId, PoiValidationError};

/// In-memory implementation of both POI driven ports.
#[derive(Debug, Default)]
pub struct InMemoryPoiStore {
    records: RwLock<BTreeMap<PoiId, Poi>>,
    last_id: AtomicI64,
}

fn poisoned() -> PoiRepositoryError {
    PoiRepositoryError::connection("poi store lock poisoned")
}

impl InMemoryPoiStore {
    /// Build a store holding `drafts`, numbered from 1 in input order.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use poi_finder::domain::{PoiCategory, PoiDraft};
    /// use poi_finder::outbound::memory::InMemoryPoiStore;
    ///
    /// let draft: PoiDraft = serde_json::from_value(serde_json::json!({
    ///     "name": "Monas",
    ///     "category": "Wisata",
    ///     "latitude": -6.1754,
    ///     "longitude": 106.8272
    /// }))
    /// .expect("draft");
    /// let store = InMemoryPoiStore::with_drafts(vec![draft], Utc::now()).expect("seeded");
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn with_drafts(
        drafts: Vec<PoiDraft>,
        now: DateTime<Utc>,
    ) -> Result<Self, PoiValidationError> {
        let mut records = BTreeMap::new();
        let mut last_id = 0;
        for draft in drafts {
            last_id += 1;
            let id = PoiId::new(last_id)?;
            records.insert(id, Poi::new(id, draft, now)?);
        }
        Ok(Self {
            records: RwLock::new(records),
            last_id: AtomicI64::new(last_id),
        })
    }

    /// Number of stored records, active or not.
    pub fn len(&self) -> usize {
        self.read().map_or(0, |records| records.len())
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<PoiId, Poi>>, PoiRepositoryError> {
        self.records.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<PoiId, Poi>>, PoiRepositoryError> {
        self.records.write().map_err(|_| poisoned())
    }
}

#[async_trait]
impl PoiCandidateSource for InMemoryPoiStore {
    async fn fetch_candidates(
        &self,
        filter: CandidateFilter,
    ) -> Result<Vec<Poi>, PoiRepositoryError> {
        let records = self.read()?;
        Ok(records
            .values()
            .filter(|poi| filter.matches(poi))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PoiRepository for InMemoryPoiStore {
    async fn next_id(&self) -> Result<PoiId, PoiRepositoryError> {
        let next = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
        PoiId::new(next).map_err(|err| PoiRepositoryError::query(err.to_string()))
    }

    async fn save(&self, poi: &Poi) -> Result<(), PoiRepositoryError> {
        self.write()?.insert(poi.id(), poi.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: PoiId) -> Result<Option<Poi>, PoiRepositoryError> {
        Ok(self.read()?.get(&id).cloned())
    }
}
