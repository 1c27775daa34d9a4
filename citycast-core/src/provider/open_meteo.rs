use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{Result, WeatherError},
    model::{CurrentConditions, DayForecast, Location, WeatherPayload},
    provider::read_body,
};

use super::{ForecastSource, Geocoder};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m,visibility";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
    base_url: String,
    language: String,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client, base_url: String, language: String) -> Self {
        Self {
            http,
            base_url,
            language,
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, place_name: &str) -> Result<Option<Location>> {
        const SERVICE: &str = "geocoding";

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("name", place_name),
                ("count", "1"),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|source| WeatherError::Request {
                service: SERVICE,
                source,
            })?;

        let body = read_body(SERVICE, res).await?;
        let parsed: GeoResponse = serde_json::from_str(&body).map_err(|source| {
            WeatherError::Decode {
                service: SERVICE,
                source,
            }
        })?;

        let Some(first) = parsed.results.and_then(|r| r.into_iter().next()) else {
            tracing::debug!(place_name, "geocoding returned no results");
            return Ok(None);
        };

        tracing::debug!(
            name = %first.name,
            country = %first.country,
            latitude = first.latitude,
            longitude = first.longitude,
            "resolved location"
        );

        Ok(Some(Location {
            name: first.name,
            country: first.country,
            latitude: first.latitude,
            longitude: first.longitude,
        }))
    }
}

#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    http: Client,
    base_url: String,
}

impl OpenMeteoForecast {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoForecast {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherPayload> {
        const SERVICE: &str = "forecast";

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("latitude", latitude), ("longitude", longitude)])
            .query(&[
                ("current", CURRENT_FIELDS),
                ("daily", DAILY_FIELDS),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .map_err(|source| WeatherError::Request {
                service: SERVICE,
                source,
            })?;

        let body = read_body(SERVICE, res).await?;
        let parsed: OmForecastResponse = serde_json::from_str(&body).map_err(|source| {
            WeatherError::Decode {
                service: SERVICE,
                source,
            }
        })?;

        parsed.into_payload()
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    relative_humidity_2m: i64,
    weather_code: i32,
    wind_speed_10m: f64,
    visibility: f64,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    weather_code: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: OmCurrent,
    daily: OmDaily,
}

impl OmForecastResponse {
    /// Zip the parallel daily arrays into one sequence of days.
    fn into_payload(self) -> Result<WeatherPayload> {
        let OmDaily {
            time,
            weather_code,
            temperature_2m_max,
            temperature_2m_min,
        } = self.daily;

        let lengths = [
            time.len(),
            weather_code.len(),
            temperature_2m_max.len(),
            temperature_2m_min.len(),
        ];
        if lengths.iter().any(|len| *len != lengths[0]) {
            tracing::debug!(?lengths, "daily arrays differ in length, truncating");
        }

        let daily = time
            .iter()
            .zip(weather_code)
            .zip(temperature_2m_max)
            .zip(temperature_2m_min)
            .map(|(((date, weather_code), temp_max_c), temp_min_c)| -> Result<DayForecast> {
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                    WeatherError::MalformedPayload(format!("invalid daily date '{date}': {e}"))
                })?;

                Ok(DayForecast {
                    date,
                    weather_code,
                    temp_max_c,
                    temp_min_c,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let current = CurrentConditions {
            temperature_c: self.current.temperature_2m,
            humidity_pct: self.current.relative_humidity_2m,
            wind_speed_kmh: self.current.wind_speed_10m,
            visibility_m: self.current.visibility,
            weather_code: self.current.weather_code,
        };

        Ok(WeatherPayload { current, daily })
    }
}
