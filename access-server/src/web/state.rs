//! Application state for the web layer.

use std::sync::Arc;

use crate::store::StopStore;

/// Shared application state.
///
/// Everything here is read-only after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// Stop dataset
    pub stops: Arc<StopStore>,

    /// Distance cutoff for the nearby-stops query, if any
    pub stop_radius_km: Option<f64>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stops: StopStore, stop_radius_km: Option<f64>) -> Self {
        Self {
            stops: Arc::new(stops),
            stop_radius_km,
        }
    }
}
