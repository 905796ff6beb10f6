use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::{
    error::FetchError,
    model::{Coordinate, SunTimeEnvelope, SunTimes},
};

use super::SunTimeSource;

pub const DEFAULT_BASE_URL: &str = "https://api.sunrise-sunset.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the sunrise-sunset.org time-of-day service.
///
/// Coordinates are substituted into the query string verbatim; callers must
/// not pass strings that would corrupt it.
#[derive(Debug, Clone)]
pub struct SunTimeClient {
    base_url: String,
    http: Client,
}

impl SunTimeClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Same client against a different endpoint, for tests and config
    /// overrides.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { base_url: base_url.into(), http })
    }

    async fn fetch_sun_times(&self, coord: &Coordinate) -> Result<SunTimes, FetchError> {
        let url = format!(
            "{}/json?lat={}&lng={}",
            self.base_url, coord.lat, coord.long
        );

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let body = res.text().await.map_err(FetchError::Transport)?;

        let envelope: SunTimeEnvelope =
            serde_json::from_str(&body).map_err(FetchError::Parse)?;

        // The envelope's status field is not part of the success contract;
        // surface odd values for operators without failing the call.
        if envelope.status != "OK" {
            tracing::warn!(status = %envelope.status, "sun-time upstream returned non-OK status");
        }

        Ok(envelope.results)
    }
}

#[async_trait]
impl SunTimeSource for SunTimeClient {
    async fn fetch(&self, coord: &Coordinate) -> Result<SunTimes, FetchError> {
        self.fetch_sun_times(coord).await
    }
}
