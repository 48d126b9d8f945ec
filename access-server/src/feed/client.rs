//! HTTP client for the stop feed.

use reqwest::StatusCode;
use tracing::{debug, info};

use crate::domain::Stop;

use super::error::FeedError;
use super::types::StopsDocument;

/// Default stop feed URL (MBTA V3 API).
pub const DEFAULT_FEED_URL: &str = "https://api-v3.mbta.com/stops";

/// Configuration for the stop feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Full URL of the stop document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a new config for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

/// Client for the stop feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw stop document.
    ///
    /// Any failure to open the URL is a [`FeedError::BadUrl`]; a reply other
    /// than 200 OK is a [`FeedError::Response`]. There is no retry.
    pub async fn fetch_document(&self) -> Result<StopsDocument, FeedError> {
        debug!(url = %self.url, "fetching stop feed");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FeedError::BadUrl {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FeedError::Response {
                url: self.url.clone(),
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .map_or_else(|| status.as_u16().to_string(), str::to_string),
            });
        }

        let body = response.text().await.map_err(|e| FeedError::BadUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| FeedError::Json {
            url: self.url.clone(),
            message: e.to_string(),
        })
    }

    /// Fetch and decode all usable stops.
    pub async fn fetch_stops(&self) -> Result<Vec<Stop>, FeedError> {
        let stops = self.fetch_document().await?.into_stops();
        info!(url = %self.url, count = stops.len(), "loaded stops from feed");
        Ok(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode as HttpStatus;
    use axum::routing::get;
    use serde_json::json;

    /// Serve `router` on an ephemeral local port, returning its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(url: String) -> FeedClient {
        FeedClient::new(FeedConfig::new(url).with_timeout(5)).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.url, DEFAULT_FEED_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_timeout() {
        let config = FeedConfig::new("http://localhost:8080/stops").with_timeout(3);
        assert_eq!(config.url, "http://localhost:8080/stops");
        assert_eq!(config.timeout_secs, 3);

        let client = FeedClient::new(config).unwrap();
        assert_eq!(client.url(), "http://localhost:8080/stops");
    }

    #[tokio::test]
    async fn fetches_stops() {
        let router = Router::new().route(
            "/stops",
            get(|| async {
                axum::Json(json!({
                    "data": [
                        {"id": "70061", "attributes": {"latitude": 42.39, "longitude": -71.14, "wheelchair_boarding": 1}},
                        {"id": "70062", "attributes": {"latitude": 42.40, "longitude": -71.14, "wheelchair_boarding": 2}}
                    ]
                }))
            }),
        );
        let base = serve(router).await;

        let stops = client(format!("{base}/stops")).fetch_stops().await.unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].stop_id, "70061");
        assert_eq!(stops[1].stop_id, "70062");
    }

    #[tokio::test]
    async fn non_success_status_is_response_error() {
        let router = Router::new().route(
            "/stops",
            get(|| async { (HttpStatus::SERVICE_UNAVAILABLE, "down for maintenance") }),
        );
        let base = serve(router).await;

        let err = client(format!("{base}/stops"))
            .fetch_document()
            .await
            .unwrap_err();
        match err {
            FeedError::Response { status, reason, .. } => {
                assert_eq!(status, 503);
                assert_eq!(reason, "Service Unavailable");
            }
            other => panic!("expected Response error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_bad_url() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}/stops"))
            .fetch_document()
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::BadUrl { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn malformed_url_is_bad_url() {
        let err = client("not a url".to_string())
            .fetch_document()
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::BadUrl { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn non_json_body_is_json_error() {
        let router = Router::new().route("/stops", get(|| async { "<html>oops</html>" }));
        let base = serve(router).await;

        let err = client(format!("{base}/stops"))
            .fetch_document()
            .await
            .unwrap_err();
        assert!(matches!(err, FeedError::Json { .. }), "got {err:?}");
    }
}
