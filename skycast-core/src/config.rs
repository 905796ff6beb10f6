use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::upstream::{openweather, suntime};

/// Environment variable holding the OpenWeatherMap API key. The historical
/// name (misspelling included) is kept so existing deployments keep working.
pub const API_KEY_ENV: &str = "OPEN_WETHER_APPID";

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_sun_api_url() -> String {
    suntime::DEFAULT_BASE_URL.to_string()
}

fn default_weather_api_url() -> String {
    openweather::DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Service configuration, loaded from a TOML file with every field optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bind address for the HTTP listener.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// OpenWeatherMap API key. Falls back to the `OPEN_WETHER_APPID`
    /// environment variable when unset; absence is not an error, the
    /// weather upstream simply rejects unauthenticated calls.
    #[serde(default)]
    pub openweather_api_key: Option<String>,

    /// Base URL of the sunrise-sunset service.
    #[serde(default = "default_sun_api_url")]
    pub sun_api_url: String,

    /// Base URL of the weather service.
    #[serde(default = "default_weather_api_url")]
    pub weather_api_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            openweather_api_key: None,
            sun_api_url: default_sun_api_url(),
            weather_api_url: default_weather_api_url(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if the file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// The API key to hand to the weather client: config value, else the
    /// environment, else empty (sent as-is, never validated locally).
    pub fn resolved_api_key(&self) -> String {
        if let Some(key) = &self.openweather_api_key {
            return key.clone();
        }

        std::env::var(API_KEY_ENV).unwrap_or_default()
    }
}
