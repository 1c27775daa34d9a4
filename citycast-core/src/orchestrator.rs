//! One search cycle: input, geocode, forecast, render.
//!
//! Searches may overlap. Each cycle takes a generation number when it starts
//! and drops its result if a newer search began while it was waiting on the
//! network, so the most recently started search always owns the view.

use chrono::{Local, NaiveDate};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    error::Result,
    model::WeatherSnapshot,
    provider::{ForecastSource, Geocoder},
    view::{ViewModel, ViewRenderer, build_weather_view},
};

/// How a call to [`SearchOrchestrator::search`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank input, nothing rendered.
    Ignored,
    /// Content view rendered.
    Displayed,
    /// No such city, error view rendered.
    NotFound,
    /// Request, decode or payload failure, error view rendered.
    Failed,
    /// A newer search started first; this result was dropped.
    Superseded,
}

enum Resolved {
    Found(WeatherSnapshot),
    NotFound,
}

pub struct SearchOrchestrator<G, F, R> {
    geocoder: G,
    forecast: F,
    renderer: R,
    generation: AtomicU64,
    today: fn() -> NaiveDate,
}

impl<G, F, R> SearchOrchestrator<G, F, R>
where
    G: Geocoder,
    F: ForecastSource,
    R: ViewRenderer,
{
    pub fn new(geocoder: G, forecast: F, renderer: R) -> Self {
        Self {
            geocoder,
            forecast,
            renderer,
            generation: AtomicU64::new(0),
            today: local_today,
        }
    }

    /// Replace the clock used for the header date.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run one search for the text in the input field.
    pub async fn search(&self, input: &str) -> SearchOutcome {
        let city = input.trim();
        if city.is_empty() {
            return SearchOutcome::Ignored;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(city, generation, "search started");
        self.renderer.render(&ViewModel::Loading);

        let (view, outcome) = match self.lookup(city).await {
            Ok(Resolved::Found(snapshot)) => {
                match build_weather_view(&snapshot, (self.today)()) {
                    Ok(weather) => (ViewModel::Content(weather), SearchOutcome::Displayed),
                    Err(e) => {
                        tracing::error!(city, error = %e, "search failed");
                        (ViewModel::Error, SearchOutcome::Failed)
                    }
                }
            }
            Ok(Resolved::NotFound) => {
                tracing::info!(city, "city not found");
                (ViewModel::Error, SearchOutcome::NotFound)
            }
            Err(e) => {
                tracing::error!(city, error = %e, "search failed");
                (ViewModel::Error, SearchOutcome::Failed)
            }
        };

        if self.is_stale(generation) {
            tracing::debug!(city, generation, "newer search started, dropping result");
            return SearchOutcome::Superseded;
        }

        self.renderer.render(&view);
        outcome
    }

    async fn lookup(&self, city: &str) -> Result<Resolved> {
        let Some(location) = self.geocoder.resolve(city).await? else {
            return Ok(Resolved::NotFound);
        };

        let payload = self
            .forecast
            .fetch(location.latitude, location.longitude)
            .await?;

        Ok(Resolved::Found(WeatherSnapshot { location, payload }))
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
