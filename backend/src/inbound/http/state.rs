//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PoiCommand, PoiSearchQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side use-cases: nearby search and listings.
    pub search: Arc<dyn PoiSearchQuery>,
    /// Write-side use-cases: create, update, and soft delete.
    pub commands: Arc<dyn PoiCommand>,
}

impl HttpState {
    /// Construct state from the two driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use poi_finder::domain::{PoiCommandService, PoiSearchService};
    /// use poi_finder::inbound::http::state::HttpState;
    /// use poi_finder::outbound::memory::InMemoryPoiStore;
    ///
    /// let store = Arc::new(InMemoryPoiStore::default());
    /// let state = HttpState::new(
    ///     Arc::new(PoiSearchService::new(store.clone())),
    ///     Arc::new(PoiCommandService::new(store, Arc::new(DefaultClock))),
    /// );
    /// let _search = state.search.clone();
    /// ```
    pub fn new(search: Arc<dyn PoiSearchQuery>, commands: Arc<dyn PoiCommand>) -> Self {
        Self { search, commands }
    }
}
