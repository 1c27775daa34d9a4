//! View model for a search result.
//!
//! The orchestrator builds a [`ViewModel`] for every state transition and
//! hands it to a [`ViewRenderer`], which is the only thing that draws.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    error::{Result, WeatherError},
    model::WeatherSnapshot,
    weather_code,
};

/// Number of forecast cards in the content view.
pub const FORECAST_DAYS: usize = 7;

/// Draws view models. Called synchronously after each state transition.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &ViewModel);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    Loading,
    Content,
    Error,
}

/// What the screen shows. Exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "weather", rename_all = "lowercase")]
pub enum ViewModel {
    Loading,
    Content(WeatherView),
    Error,
}

/// Visibility flags of the loading, content and error containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Visibility {
    pub loading: bool,
    pub content: bool,
    pub error: bool,
}

impl Visibility {
    pub fn visible_count(&self) -> usize {
        [self.loading, self.content, self.error]
            .into_iter()
            .filter(|v| *v)
            .count()
    }
}

impl ViewModel {
    pub fn state(&self) -> ViewState {
        match self {
            ViewModel::Loading => ViewState::Loading,
            ViewModel::Content(_) => ViewState::Content,
            ViewModel::Error => ViewState::Error,
        }
    }

    pub fn visibility(&self) -> Visibility {
        let state = self.state();
        Visibility {
            loading: state == ViewState::Loading,
            content: state == ViewState::Content,
            error: state == ViewState::Error,
        }
    }

    pub fn weather(&self) -> Option<&WeatherView> {
        match self {
            ViewModel::Content(view) => Some(view),
            _ => None,
        }
    }
}

/// Formatted content of a successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    /// `"{city}, {country}"`
    pub header: String,
    pub date: String,
    /// Rounded, without unit.
    pub temperature: String,
    pub description: String,
    pub icon: &'static str,
    pub wind: String,
    pub humidity: String,
    pub visibility: String,
    pub forecast: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastCard {
    pub label: String,
    pub icon: &'static str,
    pub max: String,
    pub min: String,
}

/// Map a search result onto the content view.
///
/// `today` is the local calendar date shown under the header. Fails with
/// [`WeatherError::MalformedPayload`] when fewer than [`FORECAST_DAYS`] days
/// are present.
pub fn build_weather_view(snapshot: &WeatherSnapshot, today: NaiveDate) -> Result<WeatherView> {
    let WeatherSnapshot { location, payload } = snapshot;
    let current = &payload.current;

    if payload.daily.len() < FORECAST_DAYS {
        return Err(WeatherError::MalformedPayload(format!(
            "expected {FORECAST_DAYS} daily entries, got {}",
            payload.daily.len()
        )));
    }

    let days = &payload.daily[..FORECAST_DAYS];
    if days[0].date != today {
        // Day 0 is the location's local date (timezone=auto), which can differ
        // from ours near midnight.
        tracing::debug!(
            first_day = %days[0].date,
            %today,
            "first forecast day differs from local date"
        );
    }

    let forecast = days
        .iter()
        .enumerate()
        .map(|(i, day)| ForecastCard {
            label: day_label(i, day.date),
            icon: weather_code::lookup(day.weather_code).icon,
            max: format_temperature(day.temp_max_c),
            min: format_temperature(day.temp_min_c),
        })
        .collect();

    let entry = weather_code::lookup(current.weather_code);

    Ok(WeatherView {
        header: format!("{}, {}", location.name, location.country),
        date: format_date(today),
        temperature: format_temperature(current.temperature_c),
        description: entry.description.to_string(),
        icon: entry.icon,
        wind: format!("{} km/h", current.wind_speed_kmh),
        humidity: format!("{}%", current.humidity_pct),
        visibility: format_visibility(current.visibility_m),
        forecast,
    })
}

/// "Monday, 5 Jun"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %-d %b").to_string()
}

/// Rounds half away from zero.
pub fn format_temperature(celsius: f64) -> String {
    format!("{}", celsius.round() as i64)
}

/// Meters to kilometres with one decimal, rounding the tenth half-up.
pub fn format_visibility(meters: f64) -> String {
    let tenths = (meters / 100.0).round();
    format!("{:.1} km", tenths / 10.0)
}

fn day_label(index: usize, date: NaiveDate) -> String {
    if index == 0 {
        "Today".to_string()
    } else {
        date.format("%a").to_string()
    }
}
