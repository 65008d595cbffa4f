//! Forecast providers: live, seeded, and the fallback policy.
//!
//! Forecast data is never critical, so the provider contract is infallible:
//! failures are logged and fail open as an empty sequence. The fallback
//! provider substitutes seeded fixtures when the live side comes back empty,
//! which keeps the beach panel populated with no branching in callers.

use std::collections::HashMap;

use async_trait::async_trait;

use soulsurf_locations::Location;

use crate::client::OpenMeteoClient;
use crate::normalize::normalize_hourly;
use crate::seed::seeded_forecasts;
use crate::types::{WeatherError, WeatherForecast};

/// Source of per-beach forecast data.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Forecast entries for a beach, chronological. Empty when unavailable.
    async fn forecast(&self, beach: &Location) -> Vec<WeatherForecast>;
}

/// Live Open-Meteo forecasts.
#[derive(Debug, Clone)]
pub struct LiveForecastProvider {
    client: OpenMeteoClient,
}

impl LiveForecastProvider {
    pub fn new() -> Result<Self, WeatherError> {
        Ok(Self {
            client: OpenMeteoClient::new()?,
        })
    }

    pub fn with_client(client: OpenMeteoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ForecastProvider for LiveForecastProvider {
    async fn forecast(&self, beach: &Location) -> Vec<WeatherForecast> {
        let hourly = match self.client.fetch_hourly(beach.coordinates).await {
            Ok(hourly) => hourly,
            Err(e) => {
                tracing::warn!("Forecast fetch failed for {}: {}", beach.id, e);
                return Vec::new();
            }
        };

        match normalize_hourly(&hourly) {
            Ok(forecasts) => forecasts,
            Err(e) => {
                tracing::warn!("Forecast payload rejected for {}: {}", beach.id, e);
                Vec::new()
            }
        }
    }
}

/// Static fixture forecasts keyed by beach id.
#[derive(Debug, Clone)]
pub struct SeededForecastProvider {
    forecasts: HashMap<String, Vec<WeatherForecast>>,
}

impl SeededForecastProvider {
    pub fn new() -> Self {
        Self {
            forecasts: seeded_forecasts(),
        }
    }
}

impl Default for SeededForecastProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForecastProvider for SeededForecastProvider {
    async fn forecast(&self, beach: &Location) -> Vec<WeatherForecast> {
        self.forecasts.get(&beach.id).cloned().unwrap_or_default()
    }
}

/// Live data when available, seeded fixtures otherwise.
#[derive(Debug, Clone)]
pub struct FallbackForecastProvider<L, S> {
    live: L,
    fallback: S,
}

impl<L, S> FallbackForecastProvider<L, S>
where
    L: ForecastProvider,
    S: ForecastProvider,
{
    pub fn new(live: L, fallback: S) -> Self {
        Self { live, fallback }
    }
}

#[async_trait]
impl<L, S> ForecastProvider for FallbackForecastProvider<L, S>
where
    L: ForecastProvider,
    S: ForecastProvider,
{
    async fn forecast(&self, beach: &Location) -> Vec<WeatherForecast> {
        let live = self.live.forecast(beach).await;
        if !live.is_empty() {
            return live;
        }
        tracing::info!("Falling back to seeded forecast for {}", beach.id);
        self.fallback.forecast(beach).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soulsurf_locations::LocationCatalog;

    /// Provider that always comes back empty, like a dead network.
    struct EmptyProvider;

    #[async_trait]
    impl ForecastProvider for EmptyProvider {
        async fn forecast(&self, _beach: &Location) -> Vec<WeatherForecast> {
            Vec::new()
        }
    }

    fn beach(id: &str) -> Location {
        LocationCatalog::seed().get(id).cloned().unwrap()
    }

    #[tokio::test]
    async fn seeded_provider_serves_fixture_beaches() {
        let provider = SeededForecastProvider::new();
        let forecasts = provider.forecast(&beach("beach-1")).await;
        assert_eq!(forecasts.len(), 3);
    }

    #[tokio::test]
    async fn seeded_provider_is_empty_for_unknown_beach() {
        let provider = SeededForecastProvider::new();
        let mut unknown = beach("beach-1");
        unknown.id = "beach-404".to_string();
        assert!(provider.forecast(&unknown).await.is_empty());
    }

    #[tokio::test]
    async fn fallback_substitutes_seeded_when_live_is_empty() {
        let provider = FallbackForecastProvider::new(EmptyProvider, SeededForecastProvider::new());
        let forecasts = provider.forecast(&beach("beach-2")).await;
        assert_eq!(forecasts.len(), 3);
        assert_eq!(forecasts[0].temperature, 25.0);
    }

    #[tokio::test]
    async fn fallback_prefers_live_data() {
        // Seeded-as-live wins over an empty fallback and over itself
        let provider =
            FallbackForecastProvider::new(SeededForecastProvider::new(), EmptyProvider);
        let forecasts = provider.forecast(&beach("beach-3")).await;
        assert_eq!(forecasts.len(), 3);
    }
}
