//! Stop feed error types.

/// Errors that can occur when fetching the stop feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The URL could not be opened: invalid, unresolvable or unreachable.
    #[error("The provided URL {url} is not a correct stop data URL ({reason}).")]
    BadUrl { url: String, reason: String },

    /// The feed answered with something other than 200 OK.
    #[error("The HTTP request to {url} failed with reason {reason}.")]
    Response {
        url: String,
        status: u16,
        reason: String,
    },

    /// The body was not a stop document.
    #[error("stop data from {url} is not valid JSON: {message}")]
    Json { url: String, message: String },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
