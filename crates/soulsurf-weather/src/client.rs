//! Open-Meteo forecast client.
//!
//! Open-Meteo is free and requires no API key; requests are parameterized by
//! coordinates only.

use std::time::Duration;

use serde::Deserialize;
use tracing::instrument;

use soulsurf_locations::Coordinates;

use crate::types::WeatherError;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const HOURLY_FIELDS: &str = "temperature_2m,precipitation,windspeed_10m,winddirection_10m";
const FORECAST_DAYS: u8 = 3;

/// Raw hourly section of an Open-Meteo forecast response: aligned arrays,
/// one entry per hour.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    /// ISO minute timestamps in the location's local time, e.g.
    /// `2025-04-03T06:00`.
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub windspeed_10m: Vec<f64>,
    pub winddirection_10m: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlySeries,
}

/// HTTP client for the Open-Meteo forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: OPEN_METEO_URL.to_string(),
        })
    }

    /// Client against an alternate endpoint (tests, self-hosted mirrors).
    pub fn new_with_base_url(base_url: &str) -> Result<Self, WeatherError> {
        let mut client = Self::new()?;
        client.base_url = base_url.trim_end_matches('/').to_string();
        Ok(client)
    }

    /// Fetch the hourly series for a coordinate pair, three days ahead.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_hourly(&self, coordinates: Coordinates) -> Result<HourlySeries, WeatherError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&hourly={}&forecast_days={}",
            self.base_url,
            coordinates.latitude,
            coordinates.longitude,
            HOURLY_FIELDS,
            FORECAST_DAYS,
        );

        let response = self.client.get(&url).send().await?;
        let body: ForecastResponse = Self::handle_response(response).await?;
        Ok(body.hourly)
    }

    /// Helper to handle API responses and errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, WeatherError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| WeatherError::MalformedPayload(format!("JSON parse error: {}", e)))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fortaleza() -> Coordinates {
        Coordinates {
            latitude: -3.7413,
            longitude: -38.45,
        }
    }

    fn hourly_body() -> serde_json::Value {
        serde_json::json!({
            "hourly": {
                "time": ["2025-04-03T05:00", "2025-04-03T06:00"],
                "temperature_2m": [24.0, 25.0],
                "precipitation": [0.0, 0.2],
                "windspeed_10m": [10.0, 11.0],
                "winddirection_10m": [225.0, 220.0]
            }
        })
    }

    #[tokio::test]
    async fn fetch_hourly_decodes_aligned_arrays() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "-3.7413"))
            .and(query_param("longitude", "-38.45"))
            .and(query_param("forecast_days", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(hourly_body()))
            .mount(&server)
            .await;

        let client = OpenMeteoClient::new_with_base_url(&server.uri()).unwrap();
        let hourly = client.fetch_hourly(fortaleza()).await.unwrap();
        assert_eq!(hourly.time.len(), 2);
        assert_eq!(hourly.temperature_2m[1], 25.0);
        assert_eq!(hourly.winddirection_10m[0], 225.0);
    }

    #[tokio::test]
    async fn non_2xx_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let client = OpenMeteoClient::new_with_base_url(&server.uri()).unwrap();
        let err = client.fetch_hourly(fortaleza()).await.unwrap_err();
        assert!(matches!(err, WeatherError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn undecodable_body_is_malformed_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OpenMeteoClient::new_with_base_url(&server.uri()).unwrap();
        let err = client.fetch_hourly(fortaleza()).await.unwrap_err();
        assert!(matches!(err, WeatherError::MalformedPayload(_)));
    }
}
