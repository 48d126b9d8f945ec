//! Read-only stop store.
//!
//! Stops are loaded once at startup, either from a JSON snapshot of the stop
//! feed on disk or straight from the feed, and never modified afterwards.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::Stop;
use crate::feed::{FeedClient, FeedError, StopsDocument};

/// Errors that can occur when loading the stop store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read stop file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stop file {} is not a stop document: {message}", .path.display())]
    Json { path: PathBuf, message: String },

    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// In-memory stop collection, in source order.
#[derive(Debug, Clone, Default)]
pub struct StopStore {
    stops: Vec<Stop>,
}

impl StopStore {
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Load a stop document (`{"data": [...]}`) from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document: StopsDocument =
            serde_json::from_str(&contents).map_err(|e| StoreError::Json {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let store = Self::new(document.into_stops());
        info!(path = %path.display(), count = store.len(), "loaded stops from file");
        Ok(store)
    }

    /// Load all stops from the feed.
    pub async fn fetch(client: &FeedClient) -> Result<Self, StoreError> {
        Ok(Self::new(client.fetch_stops().await?))
    }

    pub fn all(&self) -> &[Stop] {
        &self.stops
    }

    /// Every stop with the given id. Normally zero or one.
    pub fn find_by_id(&self, stop_id: &str) -> Vec<&Stop> {
        self.stops.iter().filter(|s| s.stop_id == stop_id).collect()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
