//! Wire types for the stop feed document.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{GeoPoint, Stop, WheelchairBoarding};

/// Top-level stop document: `{"data": [ ... ]}`.
///
/// Records are kept as raw JSON so that one malformed record can be skipped
/// without rejecting the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopsDocument {
    #[serde(default)]
    pub data: Vec<Value>,
}

/// One stop record in the feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopResource {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub attributes: StopAttributes,
}

/// The attributes of a stop record that this service reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopAttributes {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub wheelchair_boarding: Option<WheelchairBoarding>,
}

impl StopResource {
    /// Convert to a domain stop.
    ///
    /// Returns `None` when the record has no usable location. A missing
    /// boarding status is read as unknown.
    pub fn into_stop(self) -> Option<Stop> {
        let attrs = self.attributes;
        let location = GeoPoint::new(attrs.latitude?, attrs.longitude?).ok()?;
        Some(Stop {
            stop_id: self.id,
            name: attrs.name,
            location,
            wheelchair_boarding: attrs.wheelchair_boarding.unwrap_or_default(),
        })
    }
}

impl StopsDocument {
    /// Decode every usable record, in document order.
    ///
    /// Malformed records are logged and skipped.
    pub fn into_stops(self) -> Vec<Stop> {
        let total = self.data.len();
        let stops: Vec<Stop> = self
            .data
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let resource: StopResource = match serde_json::from_value(raw) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!(index, error = %e, "skipping malformed stop record");
                        return None;
                    }
                };
                let id = resource.id.clone();
                let stop = resource.into_stop();
                if stop.is_none() {
                    warn!(index, stop_id = %id, "skipping stop without a valid location");
                }
                stop
            })
            .collect();

        if stops.len() < total {
            warn!(
                kept = stops.len(),
                skipped = total - stops.len(),
                "some stop records were unusable"
            );
        }
        stops
    }
}
