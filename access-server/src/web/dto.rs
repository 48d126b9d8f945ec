//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, InvalidPoint, Stop, WheelchairBoarding};

/// Query string for the nearby-stops endpoint: `?lat=..&lon=..`.
///
/// Both fields are kept as raw strings so that validation can tell a missing
/// parameter from an unparseable one.
#[derive(Debug, Clone, Default)]
pub struct CoordinateQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl CoordinateQuery {
    /// Build from raw query pairs.
    ///
    /// A repeated parameter keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat" => &mut query.lat,
                "lon" => &mut query.lon,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Parse the query into a point.
    ///
    /// Fails naming every parameter that is missing, unparseable or out of
    /// range.
    pub fn validate(&self) -> Result<GeoPoint, QueryError> {
        let mut err = QueryError::default();
        let lat = parse_param("lat", self.lat.as_deref(), &mut err);
        let lon = parse_param("lon", self.lon.as_deref(), &mut err);

        let (Some(lat), Some(lon)) = (lat, lon) else {
            return Err(err);
        };

        GeoPoint::new(lat, lon).map_err(|e| {
            let mut invalid = Vec::new();
            if matches!(e, InvalidPoint::Latitude(_)) {
                invalid.push("lat");
            }
            if matches!(e, InvalidPoint::Longitude(_)) || GeoPoint::new(0.0, lon).is_err() {
                invalid.push("lon");
            }
            QueryError {
                missing: Vec::new(),
                invalid,
            }
        })
    }
}

fn parse_param(name: &'static str, raw: Option<&str>, err: &mut QueryError) -> Option<f64> {
    let Some(raw) = raw else {
        err.missing.push(name);
        return None;
    };
    match raw.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            err.invalid.push(name);
            None
        }
    }
}

/// Coordinates in a request could not be used.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.missing, .invalid))]
pub struct QueryError {
    /// Parameters absent from the query string
    pub missing: Vec<&'static str>,

    /// Parameters present but not a usable coordinate
    pub invalid: Vec<&'static str>,
}

fn describe(missing: &[&str], invalid: &[&str]) -> String {
    let mut message = String::from("Coordinates could not be parsed properly.");

    match missing {
        [] => {}
        [one] => message.push_str(&format!(" {one} is missing from the query string.")),
        many => message.push_str(&format!(
            " Both {} are missing from the query string.",
            many.join(" and ")
        )),
    }

    match invalid {
        [] => {}
        [one] => message.push_str(&format!(" {one} is not a valid coordinate.")),
        many => message.push_str(&format!(" {} are not valid coordinates.", many.join(" and "))),
    }

    message.push_str(" Make sure you're using the query stops?lat=value&lon=value.");
    message.push_str(" Also, the values should be floating point values.");
    message
}

/// Outcome flag carried in every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Bad,
}

/// A stop in a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopResult {
    pub stop_id: String,

    pub name: Option<String>,

    pub latitude: f64,

    pub longitude: f64,

    /// 0 unknown, 1 accessible, 2 not accessible
    pub wheelchair_boarding: WheelchairBoarding,
}

impl StopResult {
    /// Create from a domain Stop.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            stop_id: stop.stop_id.clone(),
            name: stop.name.clone(),
            latitude: stop.location.latitude(),
            longitude: stop.location.longitude(),
            wheelchair_boarding: stop.wheelchair_boarding,
        }
    }
}

/// Response envelope shared by both stop endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopsResponse {
    pub status: Status,
    pub message: String,
    pub stops: Vec<StopResult>,
}

impl StopsResponse {
    /// Result of a nearby-stops query.
    pub fn nearby(stops: Vec<StopResult>) -> Self {
        if stops.is_empty() {
            Self::bad("Could not find stops for the given coordinates.")
        } else {
            Self {
                status: Status::Good,
                message: format!("{} stops found", stops.len()),
                stops,
            }
        }
    }

    /// Result of a lookup by stop id.
    pub fn lookup(stops: Vec<StopResult>) -> Self {
        if stops.is_empty() {
            Self::bad("No stop found for the provided ID.")
        } else {
            Self {
                status: Status::Good,
                message: "A stop matching the given ID is found".to_string(),
                stops,
            }
        }
    }

    /// A failure with no stops.
    pub fn bad(message: impl Into<String>) -> Self {
        Self {
            status: Status::Bad,
            message: message.into(),
            stops: Vec::new(),
        }
    }
}
