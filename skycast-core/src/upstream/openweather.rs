use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::{
    error::FetchError,
    model::{Coordinate, WeatherReport},
};

use super::WeatherSource;

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeatherMap current-weather service.
///
/// The API key is injected at construction; an empty key is sent as-is and
/// rejected by the upstream, never validated locally.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http,
        })
    }

    async fn fetch_current(&self, coord: &Coordinate) -> Result<WeatherReport, FetchError> {
        let url = format!(
            "{}/data/2.5/weather?lat={}&lon={}&appid={}",
            self.base_url, coord.lat, coord.long, self.api_key
        );

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let body = res.text().await.map_err(FetchError::Transport)?;

        serde_json::from_str(&body).map_err(FetchError::Parse)
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn fetch(&self, coord: &Coordinate) -> Result<WeatherReport, FetchError> {
        self.fetch_current(coord).await
    }
}
