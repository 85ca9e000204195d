//! HTTP access to api.weather.gov.
//!
//! The API asks clients to identify themselves with a contact string in the
//! `User-Agent` header; [`NwsClient`] pins that header on every request. All
//! endpoints return JSON documents decoded straight into the types in
//! [`crate::nws::types`].

use crate::nws::error::FetchError;
use crate::nws::types::{Forecast, PointMetadata, StationCollection, StationDetail, ZoneCollection};
use crate::types::location::LatLon;
use bon::bon;
use log::{info, warn};
use serde::de::DeserializeOwned;

const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
const DEFAULT_USER_AGENT: &str = "(pointcast.app, contact@pointcast.app)";

/// A typed client for the api.weather.gov REST endpoints.
///
/// Construct one via the builder; both knobs default to the production
/// values and exist mainly so a fork can point at a proxy or send its own
/// contact string.
///
/// ```no_run
/// # use pointcast::{NwsClient, FetchError};
/// # fn run() -> Result<(), FetchError> {
/// let client = NwsClient::builder().build()?;
/// # Ok(())
/// # }
/// ```
///
/// The client holds no response state and is cheap to clone.
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: reqwest::Client,
    base_url: String,
}

#[bon]
impl NwsClient {
    /// Creates a client with the fixed identifying `User-Agent` applied to
    /// every request.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    #[builder]
    pub fn new(base_url: Option<String>, user_agent: Option<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()))
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Lists the forecast zones of a state.
    pub async fn zones_for_state(&self, state: &str) -> Result<ZoneCollection, FetchError> {
        self.fetch(&self.zones_url(state)).await
    }

    /// Lists the observation stations of a forecast zone.
    pub async fn stations_for_zone(&self, zone_id: &str) -> Result<StationCollection, FetchError> {
        self.fetch(&self.stations_url(zone_id)).await
    }

    /// Fetches the detail document of one station (for its coordinates).
    pub async fn station(&self, station_id: &str) -> Result<StationDetail, FetchError> {
        self.fetch_retry(&self.station_url(station_id)).await
    }

    /// Fetches the forecast metadata for a coordinate, carrying the hourly
    /// and grid-data forecast URLs.
    pub async fn point_metadata(&self, location: LatLon) -> Result<PointMetadata, FetchError> {
        self.fetch_retry(&self.point_url(location)).await
    }

    /// Fetches a forecast document from a URL previously advertised by
    /// [`point_metadata`](Self::point_metadata).
    pub async fn forecast(&self, url: &str) -> Result<Forecast, FetchError> {
        self.fetch_retry(url).await
    }

    fn zones_url(&self, state: &str) -> String {
        format!("{}/zones/forecast/?area={}", self.base_url, state)
    }

    fn stations_url(&self, zone_id: &str) -> String {
        format!("{}/zones/forecast/{}/stations", self.base_url, zone_id)
    }

    fn station_url(&self, station_id: &str) -> String {
        format!("{}/stations/{}", self.base_url, station_id)
    }

    fn point_url(&self, location: LatLon) -> String {
        format!("{}/points/{}", self.base_url, location)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        info!("Fetching {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(url.to_string(), e))
    }

    /// Like [`fetch`](Self::fetch), but a failed attempt is re-issued exactly
    /// once, without delay, and the second outcome is final.
    ///
    /// The station, points, and forecast endpoints intermittently answer a
    /// first request with a 500 and succeed immediately after; one blind
    /// retry absorbs that. Anything beyond it is the caller's problem.
    async fn fetch_retry<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        match self.fetch(url).await {
            Ok(value) => Ok(value),
            Err(first) => {
                warn!("Retrying {} once after failed attempt: {}", url, first);
                self.fetch(url).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NwsClient {
        NwsClient::builder().build().unwrap()
    }

    #[test]
    fn builds_endpoint_urls() {
        let client = client();
        assert_eq!(
            client.zones_url("IL"),
            "https://api.weather.gov/zones/forecast/?area=IL"
        );
        assert_eq!(
            client.stations_url("ILZ014"),
            "https://api.weather.gov/zones/forecast/ILZ014/stations"
        );
        assert_eq!(
            client.station_url("KORD"),
            "https://api.weather.gov/stations/KORD"
        );
        assert_eq!(
            client.point_url(LatLon(41.9602, -87.9336)),
            "https://api.weather.gov/points/41.9602,-87.9336"
        );
    }

    #[test]
    fn base_url_is_overridable() {
        let client = NwsClient::builder()
            .base_url("http://localhost:9100".to_string())
            .build()
            .unwrap();
        assert_eq!(client.zones_url("IL"), "http://localhost:9100/zones/forecast/?area=IL");
    }

    #[tokio::test]
    #[ignore = "hits api.weather.gov"]
    async fn lists_zones_for_illinois() {
        let zones = client().zones_for_state("IL").await.unwrap();
        assert!(!zones.features.is_empty());
    }

    #[tokio::test]
    #[ignore = "hits api.weather.gov"]
    async fn fetches_point_metadata_for_chicago() {
        let point = client().point_metadata(LatLon(41.8781, -87.6298)).await.unwrap();
        assert!(point.properties.forecast_hourly.starts_with("https://"));
        assert!(point.properties.forecast_grid_data.starts_with("https://"));
    }
}
