//! Core library for the `skycast` aggregation service.
//!
//! This crate defines:
//! - The wire/domain model (coordinates, sun times, weather reports)
//! - Clients for the two upstream HTTP services
//! - The aggregator that merges both lookups into one envelope
//! - Configuration handling
//!
//! It is used by `skycast-server`, but can also be reused by other binaries.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod model;
pub mod upstream;

pub use aggregate::Aggregator;
pub use config::Config;
pub use error::{FetchError, UpstreamError};
pub use model::{Aggregate, Coordinate, SunTimes, WeatherReport};
pub use upstream::{openweather::WeatherClient, suntime::SunTimeClient, Upstream};
