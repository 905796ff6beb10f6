use serde::{Deserialize, Serialize};

/// A latitude/longitude pair exactly as received from the caller.
///
/// The strings are opaque: no numeric validation or range checking is done,
/// they are substituted verbatim into both upstream query strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub lat: String,
    pub long: String,
}

impl Coordinate {
    pub fn new(lat: impl Into<String>, long: impl Into<String>) -> Self {
        Self { lat: lat.into(), long: long.into() }
    }
}

/// Sunrise/sunset timing for one coordinate, as returned by the sun-time
/// upstream inside its `results` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
    pub day_length: String,
}

/// The sun-time upstream's full response envelope.
///
/// `status` is carried through deserialization but never gates success; the
/// client only logs non-"OK" values.
#[derive(Debug, Clone, Deserialize)]
pub struct SunTimeEnvelope {
    pub results: SunTimes,
    pub status: String,
}

/// Current conditions for one coordinate, mirroring the OpenWeatherMap
/// current-weather payload field-for-field. No unit conversion or rounding
/// happens anywhere: what the upstream sends is what the caller gets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub coord: Coord,
    pub weather: Vec<Condition>,
    pub main: Measurements,
    pub wind: Wind,
    pub clouds: Clouds,
    pub dt: i64,
    pub sys: Sys,
    pub id: i64,
    pub name: String,
    pub cod: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub temp: f64,
    pub pressure: f64,
    pub humidity: i64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    pub all: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub message: f64,
    pub country: String,
}

/// The merged response envelope: one sun-time lookup plus one weather lookup
/// for the same coordinate. Built fresh per request, never cached or shared.
///
/// The wire name of the weather field is `wether` -- a misspelling that
/// existing clients already parse, so it stays part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub time: SunTimes,
    #[serde(rename = "wether")]
    pub weather: WeatherReport,
}
