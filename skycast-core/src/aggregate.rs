use crate::{
    error::UpstreamError,
    model::{Aggregate, Coordinate},
    upstream::{SunTimeSource, Upstream, WeatherSource},
};

/// Orchestrates the two upstream lookups for one coordinate pair.
///
/// The calls run strictly in sequence: sun-time first, weather second, and
/// the first failure short-circuits the whole aggregation. There is never a
/// partial result.
#[derive(Debug)]
pub struct Aggregator<S, W> {
    sun: S,
    weather: W,
}

impl<S, W> Aggregator<S, W>
where
    S: SunTimeSource,
    W: WeatherSource,
{
    pub fn new(sun: S, weather: W) -> Self {
        Self { sun, weather }
    }

    pub async fn fetch(&self, coord: &Coordinate) -> Result<Aggregate, UpstreamError> {
        let time = self
            .sun
            .fetch(coord)
            .await
            .map_err(|e| UpstreamError::new(Upstream::SunTime, e))?;

        let weather = self
            .weather
            .fetch(coord)
            .await
            .map_err(|e| UpstreamError::new(Upstream::Weather, e))?;

        Ok(Aggregate { time, weather })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::model::{
        Clouds, Condition, Coord, Measurements, SunTimes, Sys, WeatherReport, Wind,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sun_fixture() -> SunTimes {
        SunTimes {
            sunrise: "4:27:50 AM".to_string(),
            sunset: "6:28:54 PM".to_string(),
            day_length: "14:01:04".to_string(),
        }
    }

    fn weather_fixture() -> WeatherReport {
        WeatherReport {
            coord: Coord { lon: 139.6917, lat: 35.6895 },
            weather: vec![Condition {
                id: 803,
                main: "Clouds".to_string(),
                description: "broken clouds".to_string(),
                icon: "04d".to_string(),
            }],
            main: Measurements {
                temp: 301.23,
                pressure: 1006.0,
                humidity: 66,
                temp_min: 299.82,
                temp_max: 302.59,
            },
            wind: Wind { speed: 4.63 },
            clouds: Clouds { all: 75 },
            dt: 1661312305,
            sys: Sys { message: 0.0103, country: "JP".to_string() },
            id: 1850144,
            name: "Tokyo".to_string(),
            cod: 200,
        }
    }

    fn parse_error() -> FetchError {
        FetchError::Parse(serde_json::from_str::<serde_json::Value>("nope").unwrap_err())
    }

    #[derive(Debug)]
    struct FakeSun {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SunTimeSource for FakeSun {
        async fn fetch(&self, _coord: &Coordinate) -> Result<SunTimes, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(parse_error())
            } else {
                Ok(sun_fixture())
            }
        }
    }

    #[derive(Debug)]
    struct FakeWeather {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WeatherSource for FakeWeather {
        async fn fetch(&self, _coord: &Coordinate) -> Result<WeatherReport, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(parse_error())
            } else {
                Ok(weather_fixture())
            }
        }
    }

    fn fake_sun(fail: bool) -> FakeSun {
        FakeSun { fail, calls: AtomicUsize::new(0) }
    }

    fn fake_weather(fail: bool) -> FakeWeather {
        FakeWeather { fail, calls: AtomicUsize::new(0) }
    }

    #[tokio::test]
    async fn merges_both_results_on_success() {
        let agg = Aggregator::new(fake_sun(false), fake_weather(false));
        let coord = Coordinate::new("35.6895", "139.6917");

        let merged = agg.fetch(&coord).await.expect("aggregate");
        assert_eq!(merged.time, sun_fixture());
        assert_eq!(merged.weather, weather_fixture());
    }

    #[tokio::test]
    async fn sun_failure_short_circuits_weather() {
        let agg = Aggregator::new(fake_sun(true), fake_weather(false));
        let coord = Coordinate::new("1", "2");

        let err = agg.fetch(&coord).await.unwrap_err();
        assert_eq!(err.upstream, Upstream::SunTime);
        assert_eq!(agg.sun.calls.load(Ordering::SeqCst), 1);
        assert_eq!(agg.weather.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn weather_failure_discards_sun_result() {
        let agg = Aggregator::new(fake_sun(false), fake_weather(true));
        let coord = Coordinate::new("1", "2");

        let err = agg.fetch(&coord).await.unwrap_err();
        assert_eq!(err.upstream, Upstream::Weather);
        assert_eq!(agg.sun.calls.load(Ordering::SeqCst), 1);
        assert_eq!(agg.weather.calls.load(Ordering::SeqCst), 1);
    }
}
