//! Forecast normalization: raw hourly series to domain entries.
//!
//! The UI shows three check-in times per day. Normalization keeps only the
//! hours 06:00, 12:00, and 18:00, copies the meteorological fields verbatim,
//! and fills the wave fields with bounded placeholders since Open-Meteo has
//! no marine variables on this endpoint.

use chrono::{NaiveDateTime, Timelike};

use crate::client::HourlySeries;
use crate::types::{WeatherError, WeatherForecast};

/// Local hours of day retained by normalization.
pub const SAMPLED_HOURS: [u32; 3] = [6, 12, 18];

/// Synthetic wave height range in meters, lower inclusive.
pub const WAVE_HEIGHT_RANGE: (f64, f64) = (0.5, 2.5);

/// Synthetic wave period range in whole seconds, lower inclusive.
pub const WAVE_PERIOD_RANGE: (u32, u32) = (6, 12);

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Convert a raw hourly series into forecast entries at the sampled hours.
///
/// Entries come out in the input's (chronological) order. A timestamp that
/// fails to parse is skipped; arrays that disagree in length or an empty
/// series are a malformed payload.
///
/// # Errors
///
/// Returns [`WeatherError::MalformedPayload`] when the series is empty or
/// the aligned arrays differ in length.
pub fn normalize_hourly(hourly: &HourlySeries) -> Result<Vec<WeatherForecast>, WeatherError> {
    let len = hourly.time.len();
    if len == 0 {
        return Err(WeatherError::MalformedPayload("empty hourly series".to_string()));
    }
    if hourly.temperature_2m.len() != len
        || hourly.precipitation.len() != len
        || hourly.windspeed_10m.len() != len
        || hourly.winddirection_10m.len() != len
    {
        return Err(WeatherError::MalformedPayload(
            "hourly arrays disagree in length".to_string(),
        ));
    }

    let mut forecasts = Vec::new();
    for (i, raw) in hourly.time.iter().enumerate() {
        let stamp = match NaiveDateTime::parse_from_str(raw, TIME_FORMAT) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!("Skipping unparseable hourly timestamp {:?}: {}", raw, e);
                continue;
            }
        };
        if !SAMPLED_HOURS.contains(&stamp.hour()) {
            continue;
        }

        forecasts.push(WeatherForecast {
            date: stamp.date(),
            time: stamp.time(),
            temperature: hourly.temperature_2m[i],
            wind_speed: hourly.windspeed_10m[i],
            wind_direction: hourly.winddirection_10m[i],
            precipitation: hourly.precipitation[i],
            wave_height: Some(synthetic_wave_height()),
            wave_period: Some(synthetic_wave_period()),
        });
    }

    Ok(forecasts)
}

fn synthetic_wave_height() -> f64 {
    let (lo, hi) = WAVE_HEIGHT_RANGE;
    lo + fastrand::f64() * (hi - lo)
}

fn synthetic_wave_period() -> u32 {
    let (lo, hi) = WAVE_PERIOD_RANGE;
    fastrand::u32(lo..hi)
}
