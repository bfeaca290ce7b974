//! Domain primitives, services, and ports.
//!
//! Purpose: hold the POI model, the great-circle distance calculation, and the
//! search and lifecycle services. Nothing here knows about HTTP or storage;
//! adapters reach the services through [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - Poi, PoiDraft, PoiPatch: stored record and its write inputs.
//! - NearbySearchRequest, CategoryListingRequest, NearbyPoi: search contracts.
//! - PoiSearchService, PoiCommandService: driving port implementations.

pub mod category;
pub mod coordinate;
pub mod distance;
pub mod error;
pub mod poi;
mod poi_command_service;
mod poi_search_service;
pub mod ports;
pub mod search;

pub use self::category::{PoiCategory, UnknownCategoryError};
pub use self::coordinate::{Coordinate, CoordinateValidationError};
pub use self::distance::{EARTH_RADIUS_METRES, haversine_distance};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::poi::{Poi, PoiDraft, PoiId, PoiPatch, PoiValidationError};
pub use self::poi_command_service::PoiCommandService;
pub use self::poi_search_service::{PoiSearchService, rank_candidates};
pub use self::search::{
    CategoryListingRequest, DEFAULT_RADIUS_METRES, NearbyPoi, NearbySearchRequest,
    SearchValidationError, parse_category,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use poi_finder::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
