//! Batch join of schools against the stop feed.
//!
//! For each school with coordinates, counts the stops within half a mile and
//! how many of them have a known wheelchair boarding status.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::distance::JOIN_RADIUS_KM;
use crate::domain::{School, SchoolRecord};
use crate::feed::{FeedClient, FeedError};
use crate::proximity::join_schools;

/// Errors that abort a school join.
#[derive(Debug, thiserror::Error)]
pub enum JoinError {
    /// Checked before the feed is contacted.
    #[error("Can't process a file that does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a JSON array of school records: {message}", .path.display())]
    Json { path: PathBuf, message: String },

    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// Read the schools file: a JSON array of objects.
pub fn read_schools(path: &Path) -> Result<Vec<SchoolRecord>, JoinError> {
    if !path.exists() {
        return Err(JoinError::MissingInput(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| JoinError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|e| JoinError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read the schools, fetch the stops and join them.
///
/// The schools file is read before the feed is fetched, so a bad path never
/// costs a network round trip.
pub async fn process_schools(
    schools_path: &Path,
    feed: &FeedClient,
) -> Result<Vec<School>, JoinError> {
    let schools = read_schools(schools_path)?;
    info!(path = %schools_path.display(), count = schools.len(), "read schools");

    let stops = feed.fetch_stops().await?;

    let joined = join_schools(schools, &stops, JOIN_RADIUS_KM);
    info!(feed = %feed.url(), count = joined.len(), "scored schools");
    Ok(joined)
}
