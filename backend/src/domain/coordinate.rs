//! Geographic coordinate value type.

use serde::{Deserialize, Serialize};

use super::distance::haversine_distance;

/// Errors raised while constructing a [`Coordinate`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateValidationError {
    /// Latitude is not a finite number in `[-90, 90]`.
    #[error("latitude must be within [-90, 90], got {value}")]
    Latitude {
        /// Rejected value.
        value: f64,
    },
    /// Longitude is not a finite number in `[-180, 180]`.
    #[error("longitude must be within [-180, 180], got {value}")]
    Longitude {
        /// Rejected value.
        value: f64,
    },
}

impl CoordinateValidationError {
    /// Name of the offending field.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Latitude { .. } => "latitude",
            Self::Longitude { .. } => "longitude",
        }
    }
}

/// Latitude/longitude pair in decimal degrees (WGS84).
///
/// ## Invariants
/// - `latitude` lies in `[-90, 90]` and `longitude` in `[-180, 180]`; both are
///   finite.
///
/// # Examples
/// ```
/// use poi_finder::domain::Coordinate;
///
/// let monas = Coordinate::new(-6.1754, 106.8272).expect("valid coordinate");
/// assert_eq!(monas.distance_to(monas), 0.0);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateValidationError;

    fn try_from(value: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(value.latitude, value.longitude)
    }
}

impl Coordinate {
    /// Validate and build a coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateValidationError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateValidationError::Latitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateValidationError::Longitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other`, in metres.
    pub fn distance_to(self, other: Self) -> f64 {
        haversine_distance(self, other)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for coordinate bounds.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    #[case(-6.2088, 106.8456)]
    fn accepts_inclusive_bounds(#[case] latitude: f64, #[case] longitude: f64) {
        let coordinate = Coordinate::new(latitude, longitude).expect("valid coordinate");
        assert_eq!(coordinate.latitude(), latitude);
        assert_eq!(coordinate.longitude(), longitude);
    }

    #[rstest]
    #[case(90.000_1, 0.0, "latitude")]
    #[case(-91.0, 0.0, "latitude")]
    #[case(f64::NAN, 0.0, "latitude")]
    #[case(0.0, 180.5, "longitude")]
    #[case(0.0, f64::NEG_INFINITY, "longitude")]
    fn rejects_out_of_range_values(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] field: &str,
    ) {
        let err = Coordinate::new(latitude, longitude).expect_err("coordinate rejected");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    fn deserialisation_validates_bounds() {
        let ok: Coordinate =
            serde_json::from_str(r#"{"latitude": -6.2, "longitude": 106.8}"#).expect("valid");
        assert_eq!(ok.latitude(), -6.2);

        let result = serde_json::from_str::<Coordinate>(r#"{"latitude": 120, "longitude": 0}"#);
        assert!(result.is_err());
    }
}
