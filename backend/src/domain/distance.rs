//! Great-circle distance on a spherical Earth.
//!
//! Uses the haversine formula with a constant mean radius. Ellipsoidal
//! corrections are deliberately not applied.

use super::Coordinate;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in metres.
///
/// `sqrt(a)` is clamped to 1 so rounding near antipodal points cannot push
/// `asin` outside its domain.
///
/// # Examples
/// ```
/// use poi_finder::domain::{Coordinate, haversine_distance};
///
/// let a = Coordinate::new(0.0, 0.0).expect("valid");
/// let b = Coordinate::new(0.0, 1.0).expect("valid");
/// let metres = haversine_distance(a, b);
/// assert!((metres - 111_194.93).abs() < 0.01);
/// ```
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METRES * a.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    //! Properties and reference values for the haversine distance.
    use super::*;
    use rstest::rstest;

    fn at(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).expect("fixture coordinate")
    }

    #[rstest]
    #[case(at(-6.2088, 106.8456))]
    #[case(at(90.0, 0.0))]
    #[case(at(0.0, -180.0))]
    fn distance_to_self_is_zero(#[case] point: Coordinate) {
        assert_eq!(haversine_distance(point, point), 0.0);
    }

    #[rstest]
    #[case(at(-6.2088, 106.8456), at(-6.1754, 106.8272))]
    #[case(at(51.5074, -0.1278), at(48.8566, 2.3522))]
    #[case(at(10.0, 179.9), at(-10.0, -179.9))]
    fn distance_is_symmetric(#[case] a: Coordinate, #[case] b: Coordinate) {
        let forward = haversine_distance(a, b);
        let backward = haversine_distance(b, a);
        assert!((forward - backward).abs() < 1e-6);
    }

    #[rstest]
    fn london_to_paris_matches_reference() {
        let metres = haversine_distance(at(51.5074, -0.1278), at(48.8566, 2.3522));
        assert!((metres - 343_556.0).abs() < 500.0, "got {metres}");
    }

    #[rstest]
    fn antipodal_points_stay_finite() {
        let metres = haversine_distance(at(0.0, 0.0), at(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_METRES;
        assert!(metres.is_finite());
        assert!((metres - half_circumference).abs() < 1e-3);
    }

    #[rstest]
    fn grows_with_angular_separation() {
        let origin = at(-6.2088, 106.8456);
        let distances: Vec<f64> = [0.001, 0.01, 0.1, 1.0, 10.0]
            .into_iter()
            .map(|offset| haversine_distance(origin, at(-6.2088 + offset, 106.8456)))
            .collect();
        assert!(distances.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    fn tiny_separations_are_stable() {
        let metres = haversine_distance(at(0.0, 0.0), at(0.0, 1e-9));
        assert!(metres > 0.0);
        assert!(metres < 0.001);
    }
}
