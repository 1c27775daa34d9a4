use crate::{
    Config,
    error::{Result, WeatherError},
    model::{Location, WeatherPayload},
    provider::open_meteo::{OpenMeteoForecast, OpenMeteoGeocoder},
};
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

pub mod open_meteo;

/// Resolves a free-text place name to a location.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// `Ok(None)` means the service knows no such place.
    async fn resolve(&self, place_name: &str) -> Result<Option<Location>>;
}

/// Fetches current conditions and the daily forecast for coordinates.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherPayload>;
}

/// Build the shared HTTP client. No timeout unless the config sets one.
pub fn http_client(config: &Config) -> anyhow::Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

/// Construct both Open-Meteo clients from config, sharing one HTTP client.
pub fn open_meteo_from_config(
    config: &Config,
) -> anyhow::Result<(OpenMeteoGeocoder, OpenMeteoForecast)> {
    let http = http_client(config)?;

    let geocoder = OpenMeteoGeocoder::new(
        http.clone(),
        config.geocoding_url.clone(),
        config.language.clone(),
    );
    let forecast = OpenMeteoForecast::new(http, config.forecast_url.clone());

    Ok((geocoder, forecast))
}

const USER_AGENT: &str = concat!("citycast/", env!("CARGO_PKG_VERSION"));

/// Read a response body, turning non-2xx statuses into [`WeatherError::Status`].
pub(crate) async fn read_body(service: &'static str, res: reqwest::Response) -> Result<String> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| WeatherError::Request { service, source })?;

    if !status.is_success() {
        return Err(WeatherError::Status {
            service,
            status,
            body: truncate_body(&body),
        });
    }

    Ok(body)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
