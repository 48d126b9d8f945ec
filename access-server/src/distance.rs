//! Great-circle distance between two points.
//!
//! Uses the Haversine formula on a spherical Earth. Accuracy is more than
//! sufficient for the intra-city distances this service deals with.

use crate::domain::GeoPoint;

/// Earth radius used by the Haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// Kilometers in one statute mile.
pub const KM_PER_MILE: f64 = 1.609344;

/// Radius around a school within which stops are counted: half a mile.
pub const JOIN_RADIUS_KM: f64 = KM_PER_MILE / 2.0;

/// Convert statute miles to kilometers.
pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

/// Distance in kilometers between two points.
///
/// Identical points short-circuit to exactly zero.
///
/// # Examples
///
/// ```
/// use access_server::distance::distance;
/// use access_server::domain::GeoPoint;
///
/// let boston = GeoPoint::new(42.3601, -71.0589).unwrap();
/// let new_york = GeoPoint::new(40.7128, -74.0060).unwrap();
///
/// let km = distance(boston, new_york);
/// assert!((km - 306.0).abs() < 1.0);
/// assert_eq!(distance(boston, boston), 0.0);
/// ```
pub fn distance(p1: GeoPoint, p2: GeoPoint) -> f64 {
    if p1 == p2 {
        return 0.0;
    }

    let lat1 = p1.latitude().to_radians();
    let lat2 = p2.latitude().to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = p2.longitude().to_radians() - p1.longitude().to_radians();

    // Rounding can push `a` a hair past 1 for near-antipodal points.
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let angular_distance = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * angular_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn boston_to_new_york() {
        let boston = point(42.3601, -71.0589);
        let new_york = point(40.7128, -74.0060);
        let km = distance(boston, new_york);
        assert!((km - 306.0).abs() <= 1.0, "got {km}");
    }

    #[test]
    fn same_point_is_zero() {
        let p = point(42.36, -71.05);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 1 degree of arc = R * pi / 180
        let km = distance(point(0.0, 10.0), point(1.0, 10.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((km - expected).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points() {
        let km = distance(point(0.0, 0.0), point(0.0, 180.0));
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((km - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn crossing_the_antimeridian() {
        let km = distance(point(0.0, 179.5), point(0.0, -179.5));
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((km - expected).abs() < 1e-6);
    }

    #[test]
    fn join_radius_is_half_a_mile() {
        assert_eq!(JOIN_RADIUS_KM, 0.804672);
        assert_eq!(miles_to_km(0.5), JOIN_RADIUS_KM);
        assert_eq!(miles_to_km(1.0), KM_PER_MILE);
    }
}
