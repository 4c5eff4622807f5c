use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Collaborator, ForecastError};
use crate::model::ForecastMode;
use crate::provider::{ForecastProvider, ForecastQuery, truncate_body};
use crate::shape::DailyArrays;

/// Open-Meteo-style daily forecast client.
///
/// The per-mode field lists are fixed query strings taken from process
/// configuration and appended verbatim; coordinates, timezone and the
/// forecast-day count are filled in per request.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    base_url: String,
    temperature_params: String,
    rain_params: String,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new(
        base_url: impl Into<String>,
        temperature_params: impl Into<String>,
        rain_params: impl Into<String>,
        http: Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            temperature_params: temperature_params.into(),
            rain_params: rain_params.into(),
            http,
        }
    }

    fn request_url(&self, query: &ForecastQuery) -> String {
        let params = match query.mode {
            ForecastMode::Temperature => &self.temperature_params,
            ForecastMode::Rain => &self.rain_params,
        };

        format!(
            "{}?latitude={}&longitude={}&timezone={}&forecast_days={}&{}",
            self.base_url,
            query.latitude,
            query.longitude,
            query.timezone,
            query.forecast_days,
            params,
        )
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyArrays,
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn daily_forecast(&self, query: &ForecastQuery) -> Result<DailyArrays, ForecastError> {
        let fail = |message: String| ForecastError::collaborator(Collaborator::Weather, message);

        let url = self.request_url(query);

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| fail(format!("failed to send weather request: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| fail(format!("failed to read weather response body: {e}")))?;

        if !status.is_success() {
            return Err(fail(format!(
                "weather request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)
            .map_err(|e| fail(format!("failed to parse weather JSON: {e}")))?;

        Ok(parsed.daily)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::http_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> OpenMeteoClient {
        OpenMeteoClient::new(
            format!("{}/v1/forecast", server.uri()),
            "daily=weather_code,temperature_2m_max",
            "daily=weather_code,rain_sum",
            http_client().expect("client must build"),
        )
    }

    fn query(mode: ForecastMode) -> ForecastQuery {
        ForecastQuery {
            latitude: 38.72,
            longitude: -9.13,
            timezone: "Europe/Lisbon".to_string(),
            forecast_days: 7,
            mode,
        }
    }

    #[test]
    fn url_carries_mode_specific_params_and_day_count() {
        let client = OpenMeteoClient::new(
            "https://api.example/v1/forecast",
            "daily=temp_fields",
            "daily=rain_fields",
            Client::new(),
        );

        let temp_url = client.request_url(&query(ForecastMode::Temperature));
        assert!(temp_url.starts_with("https://api.example/v1/forecast?latitude=38.72"));
        assert!(temp_url.contains("timezone=Europe/Lisbon"));
        assert!(temp_url.contains("forecast_days=7"));
        assert!(temp_url.ends_with("&daily=temp_fields"));

        let rain_url = client.request_url(&query(ForecastMode::Rain));
        assert!(rain_url.ends_with("&daily=rain_fields"));
    }

    #[tokio::test]
    async fn parses_daily_arrays_from_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("forecast_days", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 38.72,
                "longitude": -9.13,
                "daily": {
                    "time": ["2026-09-01", "2026-09-02"],
                    "weather_code": [1, 61],
                    "rain_sum": [0.0, 4.2]
                }
            })))
            .mount(&server)
            .await;

        let daily = client(&server)
            .daily_forecast(&query(ForecastMode::Rain))
            .await
            .expect("response must parse");

        assert_eq!(daily.time.len(), 2);
        assert_eq!(daily.weather_code, vec![1, 61]);
        assert_eq!(daily.rain_sum, vec![0.0, 4.2]);
        assert!(daily.temperature_2m_max.is_empty());
    }

    #[tokio::test]
    async fn missing_daily_object_is_a_collaborator_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"hourly": {}})))
            .mount(&server)
            .await;

        let err = client(&server).daily_forecast(&query(ForecastMode::Temperature)).await.unwrap_err();

        assert!(matches!(
            err,
            ForecastError::Collaborator { collaborator: Collaborator::Weather, .. }
        ));
    }

    #[tokio::test]
    async fn upstream_error_status_is_a_collaborator_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client(&server).daily_forecast(&query(ForecastMode::Rain)).await.unwrap_err();
        assert!(err.to_string().contains("429"));
    }
}
