//! School records and their nearby-stop counters.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::GeoPoint;

/// Output keys added to each school by the join.
const COUNTER_KEYS: [&str; 3] = ["stops", "wheelchairs", "ratio"];

/// A school record as read from the schools file.
///
/// Only `lat` and `lng` are interpreted; every other field passes through the
/// join untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolRecord(pub Map<String, Value>);

impl SchoolRecord {
    /// The school's location, if `lat` and `lng` are both usable.
    ///
    /// Missing, null, zero and non-numeric values all count as "no
    /// coordinates", as do values outside the valid latitude/longitude range.
    pub fn location(&self) -> Option<GeoPoint> {
        let lat = self.coordinate("lat")?;
        let lng = self.coordinate("lng")?;
        GeoPoint::new(lat, lng).ok()
    }

    fn coordinate(&self, key: &str) -> Option<f64> {
        self.0
            .get(key)
            .and_then(Value::as_f64)
            .filter(|v| *v != 0.0)
    }
}

/// Stops counted within the join radius of a school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopCounts {
    /// Stops within the radius.
    pub stops: usize,

    /// Of those, stops with any known wheelchair boarding status.
    pub wheelchairs: usize,
}

impl StopCounts {
    /// `wheelchairs / stops`, or exactly 0 when there are no stops.
    pub fn ratio(&self) -> f64 {
        if self.stops == 0 {
            0.0
        } else {
            self.wheelchairs as f64 / self.stops as f64
        }
    }
}

/// A school augmented with its nearby-stop counters.
///
/// Serializes as the original record plus `stops`, `wheelchairs` and
/// `ratio` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct School {
    pub record: SchoolRecord,
    pub location: GeoPoint,
    pub counts: StopCounts,
}

impl School {
    pub fn ratio(&self) -> f64 {
        self.counts.ratio()
    }
}

impl Serialize for School {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let passthrough: Vec<_> = self
            .record
            .0
            .iter()
            .filter(|(k, _)| !COUNTER_KEYS.contains(&k.as_str()))
            .collect();

        let mut map = serializer.serialize_map(Some(passthrough.len() + COUNTER_KEYS.len()))?;
        for (k, v) in passthrough {
            map.serialize_entry(k, v)?;
        }
        map.serialize_entry("stops", &self.counts.stops)?;
        map.serialize_entry("wheelchairs", &self.counts.wheelchairs)?;
        map.serialize_entry("ratio", &self.ratio())?;
        map.end()
    }
}
