use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Collaborator, ForecastError};
use crate::provider::{GeoLocation, GeoProvider, truncate_body};

/// Timezone used when the geolocation response omits one.
const FALLBACK_TIMEZONE: &str = "GMT";

/// Open-Meteo-style geocoding client: `{base}?name=<city>&count=1`,
/// first match wins.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    base_url: String,
    http: Client,
}

impl GeocodingClient {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), http }
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Vec<GeoResult>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: f64,
    longitude: f64,
    timezone: Option<String>,
}

#[async_trait]
impl GeoProvider for GeocodingClient {
    async fn locate(&self, city: &str) -> Result<GeoLocation, ForecastError> {
        let fail = |message: String| ForecastError::collaborator(Collaborator::Geolocation, message);

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await
            .map_err(|e| fail(format!("failed to send geolocation request: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| fail(format!("failed to read geolocation response body: {e}")))?;

        if !status.is_success() {
            return Err(fail(format!(
                "geolocation request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        let parsed: GeoResponse = serde_json::from_str(&body)
            .map_err(|e| fail(format!("failed to parse geolocation JSON: {e}")))?;

        let first = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| fail(format!("no geolocation match for city '{city}'")))?;

        Ok(GeoLocation {
            latitude: first.latitude,
            longitude: first.longitude,
            timezone: first.timezone.unwrap_or_else(|| FALLBACK_TIMEZONE.to_string()),
        })
    }
}
