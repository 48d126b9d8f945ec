//! Server configuration.
//!
//! Built once at startup from environment variables and passed down
//! explicitly; nothing reads the environment after that.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid value {value:?} for {name}: {reason}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
    pub reason: String,
}

/// Where the server loads its stops from.
#[derive(Debug, Clone, PartialEq)]
pub enum StopSource {
    /// A JSON stop document on disk.
    File(PathBuf),
    /// The stop feed, fetched once at startup.
    Feed(String),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address to bind.
    pub host: IpAddr,

    /// Port to bind.
    pub port: u16,

    pub stops: StopSource,

    /// Optional distance cutoff (km) for the nearby-stops query.
    /// `None` returns every accessible stop regardless of distance.
    pub stop_radius_km: Option<f64>,

    /// Feed request timeout, used when `stops` is a feed.
    pub feed_timeout_secs: u64,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `APP_HOST` | `0.0.0.0` |
    /// | `APP_PORT` | `5000` |
    /// | `STOPS_PATH` | `stops.json` |
    /// | `STOPS_URL` | unset; overrides `STOPS_PATH` when set |
    /// | `STOP_RADIUS_KM` | unset (no cutoff) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get("APP_HOST") {
            config.host = host.trim().parse().map_err(|e| ConfigError {
                name: "APP_HOST",
                value: host.clone(),
                reason: format!("{e}"),
            })?;
        }

        if let Some(port) = get("APP_PORT") {
            config.port = port.trim().parse().map_err(|e| ConfigError {
                name: "APP_PORT",
                value: port.clone(),
                reason: format!("{e}"),
            })?;
        }

        if let Some(path) = get("STOPS_PATH") {
            config.stops = StopSource::File(PathBuf::from(path));
        }
        if let Some(url) = get("STOPS_URL") {
            config.stops = StopSource::Feed(url);
        }

        if let Some(radius) = get("STOP_RADIUS_KM") {
            let km: f64 = radius.trim().parse().map_err(|e| ConfigError {
                name: "STOP_RADIUS_KM",
                value: radius.clone(),
                reason: format!("{e}"),
            })?;
            if !km.is_finite() || km < 0.0 {
                return Err(ConfigError {
                    name: "STOP_RADIUS_KM",
                    value: radius,
                    reason: "must be a non-negative number of kilometers".to_string(),
                });
            }
            config.stop_radius_km = Some(km);
        }

        Ok(config)
    }

    /// Set the distance cutoff for the nearby-stops query.
    pub fn with_stop_radius_km(mut self, km: f64) -> Self {
        self.stop_radius_km = Some(km);
        self
    }

    /// Set the stop source.
    pub fn with_stops(mut self, stops: StopSource) -> Self {
        self.stops = stops;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            stops: StopSource::File(PathBuf::from("stops.json")),
            stop_radius_km: None,
            feed_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.stops, StopSource::File(PathBuf::from("stops.json")));
        assert_eq!(config.stop_radius_km, None);
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "8080"),
            ("STOPS_PATH", "/data/stops.json"),
            ("STOP_RADIUS_KM", "1.5"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.stops, StopSource::File(PathBuf::from("/data/stops.json")));
        assert_eq!(config.stop_radius_km, Some(1.5));
    }

    #[test]
    fn url_overrides_path() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STOPS_PATH", "/data/stops.json"),
            ("STOPS_URL", "https://api-v3.mbta.com/stops"),
        ]))
        .unwrap();

        assert_eq!(
            config.stops,
            StopSource::Feed("https://api-v3.mbta.com/stops".to_string())
        );
        assert_eq!(config.feed_timeout_secs, 30);
    }

    #[test]
    fn empty_values_are_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[("APP_PORT", ""), ("STOP_RADIUS_KM", " ")])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.stop_radius_km, None);
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("APP_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.name, "APP_PORT");
        assert_eq!(err.value, "eighty");
    }

    #[test]
    fn rejects_bad_radius() {
        let err = AppConfig::from_lookup(lookup(&[("STOP_RADIUS_KM", "-1")])).unwrap_err();
        assert_eq!(err.name, "STOP_RADIUS_KM");

        assert!(AppConfig::from_lookup(lookup(&[("STOP_RADIUS_KM", "inf")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("STOP_RADIUS_KM", "far")])).is_err());
    }

    #[test]
    fn builders() {
        let config = AppConfig::default()
            .with_stop_radius_km(0.8)
            .with_stops(StopSource::Feed("http://localhost/stops".into()));
        assert_eq!(config.stop_radius_km, Some(0.8));
        assert!(matches!(config.stops, StopSource::Feed(_)));
    }
}
