//! Startup forecast fan-out.
//!
//! One fetch per beach, all in flight at once; the location set is small and
//! fixed so no concurrency cap is needed. Results are gathered into a single
//! batch keyed by location id before anyone sees them, so the UI never
//! renders a half-updated forecast map.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinSet;

use soulsurf_locations::Location;

use crate::provider::ForecastProvider;
use crate::types::WeatherForecast;

/// Fetch forecasts for every given beach concurrently.
///
/// Each task writes a distinct key, so the batch map needs no locking. A task
/// that panics is logged and its beach is simply absent from the batch.
pub async fn fetch_all<P>(
    provider: Arc<P>,
    beaches: &[Location],
) -> HashMap<String, Vec<WeatherForecast>>
where
    P: ForecastProvider + 'static,
{
    let mut tasks = JoinSet::new();
    for beach in beaches {
        let provider = Arc::clone(&provider);
        let beach = beach.clone();
        tasks.spawn(async move {
            let forecasts = provider.forecast(&beach).await;
            (beach.id, forecasts)
        });
    }

    let mut batch = HashMap::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((id, forecasts)) => {
                batch.insert(id, forecasts);
            }
            Err(e) => tracing::error!("Forecast task failed: {}", e),
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SeededForecastProvider;
    use soulsurf_locations::LocationCatalog;

    #[tokio::test]
    async fn batch_covers_every_beach() {
        let catalog = LocationCatalog::seed();
        let beaches: Vec<Location> = catalog.beaches().cloned().collect();
        let provider = Arc::new(SeededForecastProvider::new());

        let batch = fetch_all(provider, &beaches).await;
        assert_eq!(batch.len(), 3);
        for beach in &beaches {
            assert!(batch.contains_key(&beach.id), "missing {}", beach.id);
            assert_eq!(batch[&beach.id].len(), 3);
        }
    }

    #[tokio::test]
    async fn empty_beach_list_is_an_empty_batch() {
        let provider = Arc::new(SeededForecastProvider::new());
        let batch = fetch_all(provider, &[]).await;
        assert!(batch.is_empty());
    }
}
