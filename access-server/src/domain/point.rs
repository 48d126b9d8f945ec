//! Geographic coordinates.

use std::fmt;

/// Error returned when a latitude/longitude pair is not a valid location.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidPoint {
    #[error("latitude {0} is not a finite value in [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is not a finite value in [-180, 180]")]
    Longitude(f64),
}

/// A latitude/longitude pair in decimal degrees.
///
/// Both components are finite and within range; any `GeoPoint` is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use access_server::domain::GeoPoint;
///
/// let boston = GeoPoint::new(42.3601, -71.0589).unwrap();
/// assert_eq!(boston.latitude(), 42.3601);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting non-finite or out-of-range components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidPoint> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidPoint::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidPoint::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_limits() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            GeoPoint::new(90.5, 0.0),
            Err(InvalidPoint::Latitude(90.5))
        );
        assert_eq!(
            GeoPoint::new(0.0, -180.5),
            Err(InvalidPoint::Longitude(-180.5))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn latitude_checked_first() {
        assert!(matches!(
            GeoPoint::new(100.0, 200.0),
            Err(InvalidPoint::Latitude(_))
        ));
    }

    #[test]
    fn display() {
        let p = GeoPoint::new(42.36, -71.05).unwrap();
        assert_eq!(p.to_string(), "(42.36, -71.05)");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            InvalidPoint::Latitude(95.0).to_string(),
            "latitude 95 is not a finite value in [-90, 90]"
        );
    }
}
