use crate::{Error, Result};
use geofix_core::Address;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";

/// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = "MyReverseGeocoder/1.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The subset of the Nominatim reverse response the tool consumes.
#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    pub address: Option<Address>,
}

/// Client for the Nominatim reverse-geocoding endpoint.
pub struct NominatimClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl NominatimClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Use an alternative endpoint (a self-hosted Nominatim, or a test
    /// server).
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|_| Error::Endpoint(endpoint.to_string()))?;

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Look up the address for a coordinate pair.
    ///
    /// Transport failures and non-2xx statuses are typed errors; a
    /// well-formed response with no `address` object is `Ok` with
    /// `address: None`.
    pub async fn reverse(&self, lat: &str, lon: &str) -> Result<ReverseResponse> {
        tracing::debug!("Reverse geocoding lat={} lon={}", lat, lon);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("format", "json"), ("lat", lat), ("lon", lon)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Display boundary over `reverse`: always yields a printable string,
    /// never propagates.
    pub async fn lookup_display(&self, lat: &str, lon: &str) -> String {
        match self.reverse(lat, lon).await {
            Ok(response) => match response.address {
                Some(address) => address.display_string(),
                None => "Location not found".to_string(),
            },
            Err(e) => format!("Geocoding error: {}", e),
        }
    }
}
