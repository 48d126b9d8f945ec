//! Distance-based filtering of stops around a point.
//!
//! Two accessibility rules live here and are kept apart on purpose: the
//! nearby-stops query only returns stops confirmed accessible, while the
//! school join counts every stop with a known boarding status.

use tracing::debug;

use crate::distance::distance;
use crate::domain::{GeoPoint, School, SchoolRecord, Stop, StopCounts};

/// Stops confirmed wheelchair accessible, optionally limited to a radius.
///
/// With `max_distance_km` set to `None` no distance cutoff is applied and
/// every accessible stop is returned. Input order is preserved.
pub fn accessible_stops_near(
    user: GeoPoint,
    stops: &[Stop],
    max_distance_km: Option<f64>,
) -> Vec<&Stop> {
    stops
        .iter()
        .filter(|stop| stop.wheelchair_boarding.is_accessible())
        .filter(|stop| max_distance_km.is_none_or(|max| distance(user, stop.location) <= max))
        .collect()
}

/// Count the stops within `radius_km` of `origin`, and how many of those have
/// a known wheelchair boarding status.
pub fn count_stops_within(origin: GeoPoint, stops: &[Stop], radius_km: f64) -> StopCounts {
    stops
        .iter()
        .filter(|stop| distance(origin, stop.location) <= radius_km)
        .fold(StopCounts::default(), |mut counts, stop| {
            counts.stops += 1;
            if stop.wheelchair_boarding.is_known() {
                counts.wheelchairs += 1;
            }
            counts
        })
}

/// Score one school against the stop collection.
///
/// Returns `None` if the record has no usable coordinates.
pub fn school_accessibility(
    record: SchoolRecord,
    stops: &[Stop],
    radius_km: f64,
) -> Option<School> {
    let location = record.location()?;
    let counts = count_stops_within(location, stops, radius_km);
    Some(School {
        record,
        location,
        counts,
    })
}

/// Score every school with coordinates; the rest are dropped from the output.
pub fn join_schools(schools: Vec<SchoolRecord>, stops: &[Stop], radius_km: f64) -> Vec<School> {
    let total = schools.len();
    let joined: Vec<School> = schools
        .into_iter()
        .filter_map(|record| school_accessibility(record, stops, radius_km))
        .collect();

    debug!(
        total,
        joined = joined.len(),
        skipped = total - joined.len(),
        "joined schools against stops"
    );
    joined
}
