use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// First geocoding hit for a place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_pct: i64,
    pub wind_speed_kmh: f64,
    pub visibility_m: f64,
    pub weather_code: i32,
}

/// One day of the daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
}

/// Decoded forecast response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    pub current: CurrentConditions,
    pub daily: Vec<DayForecast>,
}

/// Everything one search produced. Lives for a single render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub payload: WeatherPayload,
}
