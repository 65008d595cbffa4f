//! Forecast domain types and weather errors.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single forecast entry at one of the surf check-in times of day.
///
/// Wave fields are synthetic placeholders: no marine data source is wired in,
/// so they carry bounded pseudo-random values and must never be asserted
/// exactly, only by range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    /// One of 06:00, 12:00, 18:00.
    pub time: NaiveTime,
    /// Air temperature in °C.
    pub temperature: f64,
    /// Wind speed in km/h.
    pub wind_speed: f64,
    /// Meteorological "blowing from" direction, degrees 0-359.
    pub wind_direction: f64,
    /// Precipitation in mm.
    pub precipitation: f64,
    /// Wave height in meters; always synthetic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_height: Option<f64>,
    /// Wave period in whole seconds; always synthetic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_period: Option<u32>,
}

/// Weather provider errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Forecast API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed forecast payload: {0}")]
    MalformedPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_serializes_without_absent_wave_fields() {
        let forecast = WeatherForecast {
            date: "2025-04-03".parse().unwrap(),
            time: "12:00:00".parse().unwrap(),
            temperature: 30.0,
            wind_speed: 15.0,
            wind_direction: 180.0,
            precipitation: 0.0,
            wave_height: None,
            wave_period: None,
        };
        let json = serde_json::to_string(&forecast).unwrap();
        assert!(!json.contains("wave_height"));
        assert!(!json.contains("wave_period"));
    }

    #[test]
    fn error_display_names_the_failure() {
        let err = WeatherError::Api {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));

        let err = WeatherError::MalformedPayload("misaligned arrays".to_string());
        assert!(err.to_string().contains("misaligned"));
    }
}
