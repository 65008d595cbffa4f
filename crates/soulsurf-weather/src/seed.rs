//! Seeded fixture forecasts, used when the live fetch fails.

use std::collections::HashMap;

use crate::types::WeatherForecast;

fn entry(
    time: &str,
    temperature: f64,
    wind_speed: f64,
    wind_direction: f64,
    wave_height: f64,
    wave_period: u32,
    precipitation: f64,
) -> WeatherForecast {
    WeatherForecast {
        date: "2025-04-03".parse().unwrap_or_default(),
        time: time.parse().unwrap_or_default(),
        temperature,
        wind_speed,
        wind_direction,
        precipitation,
        wave_height: Some(wave_height),
        wave_period: Some(wave_period),
    }
}

/// Fixture forecasts keyed by beach id: one covered day at the three
/// check-in times.
pub fn seeded_forecasts() -> HashMap<String, Vec<WeatherForecast>> {
    let mut forecasts = HashMap::new();
    forecasts.insert(
        "beach-1".to_string(),
        vec![
            entry("06:00:00", 26.0, 10.0, 225.0, 1.2, 8, 0.0),
            entry("12:00:00", 30.0, 15.0, 180.0, 1.4, 9, 0.0),
            entry("18:00:00", 28.0, 12.0, 135.0, 1.1, 7, 10.0),
        ],
    );
    forecasts.insert(
        "beach-2".to_string(),
        vec![
            entry("06:00:00", 25.0, 8.0, 200.0, 0.9, 6, 0.0),
            entry("12:00:00", 29.0, 14.0, 170.0, 1.1, 7, 0.0),
            entry("18:00:00", 27.0, 16.0, 150.0, 1.0, 6, 20.0),
        ],
    );
    forecasts.insert(
        "beach-3".to_string(),
        vec![
            entry("06:00:00", 26.0, 12.0, 220.0, 1.5, 10, 0.0),
            entry("12:00:00", 30.0, 18.0, 185.0, 1.6, 11, 0.0),
            entry("18:00:00", 28.0, 15.0, 160.0, 1.4, 9, 10.0),
        ],
    );
    forecasts
}
