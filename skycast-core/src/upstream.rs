use crate::{
    error::FetchError,
    model::{Coordinate, SunTimes, WeatherReport},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;
pub mod suntime;

/// Identifies which external service a call (or failure) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    SunTime,
    Weather,
}

impl Upstream {
    pub fn as_str(&self) -> &'static str {
        match self {
            Upstream::SunTime => "sun-time",
            Upstream::Weather => "weather",
        }
    }
}

impl std::fmt::Display for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of sunrise/sunset timing for a coordinate.
#[async_trait]
pub trait SunTimeSource: Send + Sync + Debug {
    async fn fetch(&self, coord: &Coordinate) -> Result<SunTimes, FetchError>;
}

/// Source of current weather conditions for a coordinate.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, coord: &Coordinate) -> Result<WeatherReport, FetchError>;
}
