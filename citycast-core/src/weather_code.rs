//! WMO weather code table.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::Serialize;

/// Description and icon key for a single WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCodeEntry {
    pub description: &'static str,
    pub icon: &'static str,
}

impl WeatherCodeEntry {
    const fn new(description: &'static str, icon: &'static str) -> Self {
        Self { description, icon }
    }
}

/// Entry returned for any code missing from the table.
pub const UNKNOWN: WeatherCodeEntry = WeatherCodeEntry::new("Unknown", "fa-question");

/// Look up a WMO code. Always defined: unknown codes map to [`UNKNOWN`].
pub fn lookup(code: i32) -> WeatherCodeEntry {
    match code {
        0 => WeatherCodeEntry::new("Clear sky", "fa-sun"),
        1 => WeatherCodeEntry::new("Mainly clear", "fa-cloud-sun"),
        2 => WeatherCodeEntry::new("Partly cloudy", "fa-cloud-sun"),
        3 => WeatherCodeEntry::new("Overcast", "fa-cloud"),
        45 => WeatherCodeEntry::new("Fog", "fa-smog"),
        48 => WeatherCodeEntry::new("Depositing rime fog", "fa-smog"),
        51 => WeatherCodeEntry::new("Light drizzle", "fa-cloud-rain"),
        53 => WeatherCodeEntry::new("Moderate drizzle", "fa-cloud-rain"),
        55 => WeatherCodeEntry::new("Dense drizzle", "fa-cloud-showers-heavy"),
        61 => WeatherCodeEntry::new("Slight rain", "fa-cloud-rain"),
        63 => WeatherCodeEntry::new("Moderate rain", "fa-cloud-rain"),
        65 => WeatherCodeEntry::new("Heavy rain", "fa-cloud-showers-heavy"),
        71 => WeatherCodeEntry::new("Slight snow", "fa-snowflake"),
        73 => WeatherCodeEntry::new("Moderate snow", "fa-snowflake"),
        75 => WeatherCodeEntry::new("Heavy snow", "fa-snowflake"),
        77 => WeatherCodeEntry::new("Snow grains", "fa-snowflake"),
        80 => WeatherCodeEntry::new("Slight rain showers", "fa-cloud-rain"),
        81 => WeatherCodeEntry::new("Moderate rain showers", "fa-cloud-rain"),
        82 => WeatherCodeEntry::new("Violent rain showers", "fa-cloud-showers-heavy"),
        95 => WeatherCodeEntry::new("Thunderstorm", "fa-bolt"),
        96 => WeatherCodeEntry::new("Thunderstorm with hail", "fa-bolt"),
        99 => WeatherCodeEntry::new("Thunderstorm with heavy hail", "fa-bolt"),
        _ => UNKNOWN,
    }
}

/// Codes with a dedicated entry in the table.
pub const KNOWN_CODES: &[i32] = &[
    0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 77, 80, 81, 82, 95, 96, 99,
];

/// Terminal glyph for an icon key.
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "fa-sun" => "☀",
        "fa-cloud-sun" => "⛅",
        "fa-cloud" => "☁",
        "fa-smog" => "🌫",
        "fa-cloud-rain" => "🌧",
        "fa-cloud-showers-heavy" => "⛆",
        "fa-snowflake" => "❄",
        "fa-bolt" => "⚡",
        _ => "?",
    }
}
