//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod poi_command;
mod poi_repository;
mod poi_search_query;

pub use poi_command::PoiCommand;
pub use poi_repository::{
    CandidateFilter, PoiCandidateSource, PoiRepository, PoiRepositoryError,
};
#[cfg(test)]
pub use poi_repository::{MockPoiCandidateSource, MockPoiRepository};
pub use poi_search_query::PoiSearchQuery;
