//! Core library for the `citycast` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - Open-Meteo geocoding and forecast clients behind small traits
//! - The WMO weather code table
//! - The view model and the search orchestrator that drives it
//!
//! It is used by `citycast-cli`, but any front end that implements
//! [`ViewRenderer`] can drive a [`SearchOrchestrator`].

pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod provider;
pub mod view;
pub mod weather_code;

pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentConditions, DayForecast, Location, WeatherPayload, WeatherSnapshot};
pub use orchestrator::{SearchOrchestrator, SearchOutcome};
pub use provider::{ForecastSource, Geocoder, open_meteo_from_config};
pub use view::{ViewModel, ViewRenderer, ViewState, Visibility, WeatherView};
pub use weather_code::{WeatherCodeEntry, lookup};
