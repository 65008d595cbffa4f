//! Weather service for Soul Surf.
//!
//! Fetches hourly forecasts per beach from Open-Meteo, normalizes them to the
//! three surf check-in times of day (06:00, 12:00, 18:00), and classifies the
//! result into a human-readable surf-condition phrase. When the live fetch
//! fails the seeded fixture forecasts take over, so callers always get data.

pub mod client;
pub mod conditions;
pub mod fanout;
pub mod normalize;
pub mod provider;
pub mod seed;
pub mod types;

pub use client::{HourlySeries, OpenMeteoClient};
pub use conditions::surf_condition_text;
pub use fanout::fetch_all;
pub use normalize::normalize_hourly;
pub use provider::{
    FallbackForecastProvider, ForecastProvider, LiveForecastProvider, SeededForecastProvider,
};
pub use types::{WeatherError, WeatherForecast};
