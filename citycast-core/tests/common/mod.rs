//! Shared fixtures for the mock-server tests.

#![allow(dead_code)]

use citycast_core::{Config, ViewModel, ViewRenderer, ViewState};
use std::sync::Mutex;
use wiremock::MockServer;

pub const GEOCODING_PATH: &str = "/v1/search";
pub const FORECAST_PATH: &str = "/v1/forecast";

/// Config pointing both endpoints at the mock server.
pub fn config_for(server: &MockServer) -> Config {
    Config {
        geocoding_url: format!("{}{GEOCODING_PATH}", server.uri()),
        forecast_url: format!("{}{FORECAST_PATH}", server.uri()),
        ..Config::default()
    }
}

pub fn geocoding_hit(name: &str, country: &str, latitude: f64, longitude: f64) -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "id": 2950159,
            "name": name,
            "latitude": latitude,
            "longitude": longitude,
            "elevation": 74.0,
            "feature_code": "PPLC",
            "country_code": "DE",
            "timezone": "Europe/Berlin",
            "country": country
        }],
        "generationtime_ms": 0.6
    })
}

/// Forecast body with `days` daily entries starting 2023-06-05.
pub fn forecast_body(days: usize, temperature: f64) -> serde_json::Value {
    let dates = [
        "2023-06-05", "2023-06-06", "2023-06-07", "2023-06-08", "2023-06-09", "2023-06-10",
        "2023-06-11", "2023-06-12",
    ];
    let days = days.min(dates.len());

    serde_json::json!({
        "latitude": 52.52,
        "longitude": 13.419998,
        "timezone": "Europe/Berlin",
        "current": {
            "time": "2023-06-05T14:00",
            "interval": 900,
            "temperature_2m": temperature,
            "relative_humidity_2m": 64,
            "weather_code": 3,
            "wind_speed_10m": 11.2,
            "visibility": 850.0
        },
        "daily": {
            "time": &dates[..days],
            "weather_code": vec![61; days],
            "temperature_2m_max": vec![20.4; days],
            "temperature_2m_min": vec![14.5; days]
        }
    })
}

#[derive(Default)]
pub struct Recorder(Mutex<Vec<ViewModel>>);

impl Recorder {
    pub fn views(&self) -> Vec<ViewModel> {
        self.0.lock().expect("lock").clone()
    }

    pub fn states(&self) -> Vec<ViewState> {
        self.views().iter().map(ViewModel::state).collect()
    }

    pub fn last(&self) -> Option<ViewModel> {
        self.views().pop()
    }
}

impl ViewRenderer for Recorder {
    fn render(&self, view: &ViewModel) {
        // At no point may more or fewer than one container be visible.
        assert_eq!(view.visibility().visible_count(), 1);
        self.0.lock().expect("lock").push(view.clone());
    }
}
