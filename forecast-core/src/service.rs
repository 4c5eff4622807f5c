use anyhow::Context;
use tracing::info;

use crate::codes::WeatherCodeTable;
use crate::config::Config;
use crate::error::ForecastError;
use crate::model::{DayWindow, ForecastMode, ForecastResult};
use crate::provider::geocoding::GeocodingClient;
use crate::provider::open_meteo::OpenMeteoClient;
use crate::provider::{ForecastProvider, ForecastQuery, GeoProvider, http_client};
use crate::shape::shape;

/// Orchestration layer: resolve the city, fetch the raw forecast for the
/// requested window, shape it. Any collaborator failure short-circuits into
/// a typed error; a partial or garbled forecast is never returned.
#[derive(Debug)]
pub struct ForecastService {
    geo: Box<dyn GeoProvider>,
    weather: Box<dyn ForecastProvider>,
    codes: WeatherCodeTable,
}

impl ForecastService {
    pub fn new(
        geo: Box<dyn GeoProvider>,
        weather: Box<dyn ForecastProvider>,
        codes: WeatherCodeTable,
    ) -> Self {
        Self { geo, weather, codes }
    }

    /// Wire up the real collaborators from process configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = http_client().context("Failed to build HTTP client")?;

        let geo = GeocodingClient::new(config.geolocation_api_url.clone(), http.clone());
        let weather = OpenMeteoClient::new(
            config.weather_api_url.clone(),
            config.temperature_params.clone(),
            config.rain_params.clone(),
            http,
        );

        Ok(Self::new(Box::new(geo), Box::new(weather), WeatherCodeTable::bundled()))
    }

    pub async fn temperature_forecast(
        &self,
        city: &str,
        days: u32,
    ) -> Result<ForecastResult, ForecastError> {
        self.forecast(city, days, ForecastMode::Temperature).await
    }

    pub async fn rain_forecast(
        &self,
        city: &str,
        days: u32,
    ) -> Result<ForecastResult, ForecastError> {
        self.forecast(city, days, ForecastMode::Rain).await
    }

    async fn forecast(
        &self,
        city: &str,
        days: u32,
        mode: ForecastMode,
    ) -> Result<ForecastResult, ForecastError> {
        // Validate before spending a collaborator call.
        let window = DayWindow::from_requested_days(days)?;

        let location = self.geo.locate(city).await?;
        info!(
            city,
            latitude = location.latitude,
            longitude = location.longitude,
            timezone = %location.timezone,
            "resolved city"
        );

        let query = ForecastQuery {
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: location.timezone.clone(),
            forecast_days: window.required_days(),
            mode,
        };
        let daily = self.weather.daily_forecast(&query).await?;

        let result = shape(city, &location.timezone, &daily, window, mode, &self.codes)?;
        info!(city, %mode, days = result.len(), "shaped forecast");

        Ok(result)
    }
}
