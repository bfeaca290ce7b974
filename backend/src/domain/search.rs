//! Search request and result contracts.
//!
//! Requests are validated on construction, so a value of these types never
//! reaches the POI source with out-of-range input.

use pagination::{PageRequest, PaginationError};

use super::{Coordinate, CoordinateValidationError, Poi, PoiCategory, UnknownCategoryError};

/// Radius applied when the caller does not supply one.
pub const DEFAULT_RADIUS_METRES: f64 = 5_000.0;

/// Validation failures for search requests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchValidationError {
    /// Origin coordinate out of range.
    #[error(transparent)]
    Coordinate(#[from] CoordinateValidationError),
    /// Radius is not a finite, strictly positive number of metres.
    #[error("radius must be greater than zero, got {value}")]
    Radius {
        /// Rejected radius.
        value: f64,
    },
    /// Limit is zero or above the page ceiling.
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    /// Limit is negative or too large to represent a page size.
    #[error("limit must be between 1 and {max}, got {value}", max = pagination::MAX_LIMIT)]
    Limit {
        /// Rejected limit.
        value: i64,
    },
    /// Offset is negative or too large to represent a window start.
    #[error("offset must be between 0 and {max}, got {value}", max = u32::MAX)]
    Offset {
        /// Rejected offset.
        value: i64,
    },
    /// Category label is not one of the known tags.
    #[error(transparent)]
    Category(#[from] UnknownCategoryError),
}

impl SearchValidationError {
    /// Name of the offending request field.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Coordinate(error) => error.field(),
            Self::Radius { .. } => "radius",
            Self::Pagination(_) | Self::Limit { .. } => "limit",
            Self::Offset { .. } => "offset",
            Self::Category(_) => "category",
        }
    }
}

/// Parse an optional category label supplied by a caller.
pub fn parse_category(label: Option<&str>) -> Result<Option<PoiCategory>, SearchValidationError> {
    label
        .map(str::parse::<PoiCategory>)
        .transpose()
        .map_err(SearchValidationError::from)
}

// Narrows caller-supplied bounds so a failure names its field.
fn page_window(
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<PageRequest, SearchValidationError> {
    let limit = limit
        .map(|value| u32::try_from(value).map_err(|_| SearchValidationError::Limit { value }))
        .transpose()?;
    let offset = offset
        .map(|value| u32::try_from(value).map_err(|_| SearchValidationError::Offset { value }))
        .transpose()?;
    Ok(PageRequest::new(limit, offset)?)
}

/// Radius search around an origin.
///
/// # Examples
/// ```
/// use poi_finder::domain::{DEFAULT_RADIUS_METRES, NearbySearchRequest};
///
/// let request = NearbySearchRequest::new(-6.2088, 106.8456, None, None, None, None)
///     .expect("valid request");
/// assert_eq!(request.radius_metres(), DEFAULT_RADIUS_METRES);
/// assert_eq!(request.page().limit(), 20);
/// assert!(NearbySearchRequest::new(-6.2, 106.8, Some(0.0), None, None, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbySearchRequest {
    origin: Coordinate,
    radius_metres: f64,
    category: Option<PoiCategory>,
    page: PageRequest,
}

impl NearbySearchRequest {
    /// Validate caller input, applying the default radius, limit, and offset.
    pub fn new(
        latitude: f64,
        longitude: f64,
        radius_metres: Option<f64>,
        category: Option<PoiCategory>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Self, SearchValidationError> {
        let origin = Coordinate::new(latitude, longitude)?;
        let radius = radius_metres.unwrap_or(DEFAULT_RADIUS_METRES);
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SearchValidationError::Radius { value: radius });
        }
        let page = page_window(limit, offset)?;
        Ok(Self {
            origin,
            radius_metres: radius,
            category,
            page,
        })
    }

    /// Search origin.
    pub const fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Inclusive search radius in metres.
    pub const fn radius_metres(&self) -> f64 {
        self.radius_metres
    }

    /// Optional category restriction.
    pub const fn category(&self) -> Option<PoiCategory> {
        self.category
    }

    /// Offset and limit applied after ranking.
    pub const fn page(&self) -> PageRequest {
        self.page
    }
}

/// Flat listing of one category without a radius constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryListingRequest {
    category: PoiCategory,
    page: PageRequest,
}

impl CategoryListingRequest {
    /// Validate paging input for a category listing.
    pub fn new(
        category: PoiCategory,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Self, SearchValidationError> {
        Ok(Self {
            category,
            page: page_window(limit, offset)?,
        })
    }

    /// Category being listed.
    pub const fn category(&self) -> PoiCategory {
        self.category
    }

    /// Window to return.
    pub const fn page(&self) -> PageRequest {
        self.page
    }
}

/// Search result entry: a POI and its distance from the request origin.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPoi {
    poi: Poi,
    distance_metres: f64,
}

impl NearbyPoi {
    /// Pair a POI with its computed distance.
    pub const fn new(poi: Poi, distance_metres: f64) -> Self {
        Self {
            poi,
            distance_metres,
        }
    }

    /// Matched POI.
    pub const fn poi(&self) -> &Poi {
        &self.poi
    }

    /// Great-circle distance from the origin, in metres.
    pub const fn distance_metres(&self) -> f64 {
        self.distance_metres
    }

    /// Split the entry into its parts.
    pub fn into_parts(self) -> (Poi, f64) {
        (self.poi, self.distance_metres)
    }
}

#[cfg(test)]
mod tests {
    //! Validation coverage for search requests.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn nearby_defaults_are_applied() {
        let request =
            NearbySearchRequest::new(-6.2088, 106.8456, None, None, None, None).expect("valid");
        assert_eq!(request.radius_metres(), 5_000.0);
        assert_eq!(request.page().limit(), pagination::DEFAULT_LIMIT);
        assert_eq!(request.page().offset(), 0);
        assert_eq!(request.category(), None);
    }

    #[rstest]
    #[case(Some(0.0))]
    #[case(Some(-10.0))]
    #[case(Some(f64::NAN))]
    #[case(Some(f64::INFINITY))]
    fn nearby_rejects_non_positive_radius(#[case] radius: Option<f64>) {
        let err = NearbySearchRequest::new(0.0, 0.0, radius, None, None, None)
            .expect_err("radius rejected");
        assert_eq!(err.field(), "radius");
    }

    #[rstest]
    #[case(95.0, 0.0, "latitude")]
    #[case(0.0, -181.0, "longitude")]
    fn nearby_rejects_bad_origin(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] field: &str,
    ) {
        let err = NearbySearchRequest::new(latitude, longitude, None, None, None, None)
            .expect_err("origin rejected");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(101))]
    #[case(Some(-1))]
    #[case(Some(i64::from(u32::MAX) + 1))]
    fn nearby_rejects_limit_out_of_bounds(#[case] limit: Option<i64>) {
        let err = NearbySearchRequest::new(0.0, 0.0, None, None, limit, None)
            .expect_err("limit rejected");
        assert_eq!(err.field(), "limit");
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::from(u32::MAX) + 1)]
    fn offset_outside_window_range_names_offset(#[case] offset: i64) {
        let err = NearbySearchRequest::new(0.0, 0.0, None, None, None, Some(offset))
            .expect_err("offset rejected");
        assert_eq!(err.field(), "offset");
        assert_eq!(err, SearchValidationError::Offset { value: offset });

        let err = CategoryListingRequest::new(PoiCategory::Belanja, None, Some(offset))
            .expect_err("offset rejected");
        assert_eq!(err.field(), "offset");
    }

    #[rstest]
    fn negative_limit_message_names_bounds() {
        let err = CategoryListingRequest::new(PoiCategory::Wisata, Some(-1), None)
            .expect_err("limit rejected");
        assert_eq!(err.field(), "limit");
        assert_eq!(err.to_string(), "limit must be between 1 and 100, got -1");
    }

    #[rstest]
    fn category_listing_keeps_window() {
        let request = CategoryListingRequest::new(PoiCategory::Kuliner, Some(2), Some(1))
            .expect("valid listing");
        assert_eq!(request.category(), PoiCategory::Kuliner);
        assert_eq!(request.page().limit(), 2);
        assert_eq!(request.page().offset(), 1);
    }

    #[rstest]
    fn parse_category_reports_category_field() {
        assert_eq!(parse_category(None).expect("absent is fine"), None);
        assert_eq!(
            parse_category(Some("Wisata")).expect("known label"),
            Some(PoiCategory::Wisata)
        );
        let err = parse_category(Some("Hiburan")).expect_err("unknown label");
        assert_eq!(err.field(), "category");
    }
}
