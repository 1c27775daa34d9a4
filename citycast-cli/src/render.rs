//! Terminal renderers for the search view.

use citycast_core::{ViewModel, ViewRenderer, WeatherView, weather_code::glyph};
use std::{fmt::Write as _, sync::Mutex};

const ERROR_MESSAGE: &str = "Could not find weather for that city. Please try again.";
const CARD_WIDTH: usize = 9;

/// Draws every view to stdout as it arrives.
#[derive(Debug, Clone, Copy)]
pub struct TerminalView;

impl ViewRenderer for TerminalView {
    fn render(&self, view: &ViewModel) {
        println!("{}", draw(view));
    }
}

/// Keeps only the most recent view, for `show --json`.
#[derive(Debug, Default)]
pub struct LastView(Mutex<Option<ViewModel>>);

impl LastView {
    pub fn take(&self) -> Option<ViewModel> {
        self.0.lock().ok().and_then(|mut last| last.take())
    }
}

impl ViewRenderer for LastView {
    fn render(&self, view: &ViewModel) {
        if let Ok(mut last) = self.0.lock() {
            *last = Some(view.clone());
        }
    }
}

pub fn draw(view: &ViewModel) -> String {
    match view {
        ViewModel::Loading => "Loading...".to_string(),
        ViewModel::Content(weather) => draw_weather(weather),
        ViewModel::Error => ERROR_MESSAGE.to_string(),
    }
}

fn draw_weather(weather: &WeatherView) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", weather.header);
    let _ = writeln!(out, "{}", weather.date);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {} {}°C  {}",
        glyph(weather.icon),
        weather.temperature,
        weather.description
    );
    let _ = writeln!(
        out,
        "  Wind {}   Humidity {}   Visibility {}",
        weather.wind, weather.humidity, weather.visibility
    );
    let _ = writeln!(out);

    let mut labels = String::from(" ");
    let mut icons = String::from(" ");
    let mut temps = String::from(" ");
    for card in &weather.forecast {
        let _ = write!(labels, " {:<CARD_WIDTH$}", card.label);
        let _ = write!(icons, " {:<CARD_WIDTH$}", glyph(card.icon));
        let _ = write!(
            temps,
            " {:<CARD_WIDTH$}",
            format!("{}° {}°", card.max, card.min)
        );
    }
    let _ = writeln!(out, "{}", labels.trim_end());
    let _ = writeln!(out, "{}", icons.trim_end());
    let _ = write!(out, "{}", temps.trim_end());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use citycast_core::view::ForecastCard;

    fn weather() -> WeatherView {
        let labels = ["Today", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        WeatherView {
            header: "Berlin, Germany".into(),
            date: "Monday, 5 Jun".into(),
            temperature: "19".into(),
            description: "Partly cloudy".into(),
            icon: "fa-cloud-sun",
            wind: "11.5 km/h".into(),
            humidity: "64%".into(),
            visibility: "12.0 km".into(),
            forecast: labels
                .iter()
                .map(|label| ForecastCard {
                    label: label.to_string(),
                    icon: "fa-sun",
                    max: "20".into(),
                    min: "15".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn draws_loading_and_error() {
        assert_eq!(draw(&ViewModel::Loading), "Loading...");
        assert_eq!(draw(&ViewModel::Error), ERROR_MESSAGE);
    }

    #[test]
    fn draws_header_metrics_and_cards() {
        let out = draw(&ViewModel::Content(weather()));
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines[0], "Berlin, Germany");
        assert_eq!(lines[1], "Monday, 5 Jun");
        assert!(lines[3].contains("19°C  Partly cloudy"));
        assert!(lines[4].contains("Wind 11.5 km/h"));
        assert!(lines[4].contains("Visibility 12.0 km"));
        assert!(lines[6].trim_start().starts_with("Today"));
        assert!(lines[6].ends_with("Sun"));
        assert_eq!(lines[8].matches("20° 15°").count(), 7);
    }

    #[test]
    fn last_view_keeps_most_recent() {
        let last = LastView::default();
        last.render(&ViewModel::Loading);
        last.render(&ViewModel::Error);

        assert_eq!(last.take(), Some(ViewModel::Error));
        assert_eq!(last.take(), None);
    }
}
