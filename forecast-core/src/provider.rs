use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

use crate::error::ForecastError;
use crate::model::ForecastMode;
use crate::shape::DailyArrays;

pub mod geocoding;
pub mod open_meteo;

/// Upper bound on any single outbound call. Collaborators that hang past
/// this surface as a collaborator failure, never as an open-ended stall.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved location of a city: everything the weather collaborator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

/// Parameters of a single weather-collaborator call.
#[derive(Debug, Clone)]
pub struct ForecastQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    /// How many forecast days the window requires the provider to return.
    pub forecast_days: usize,
    pub mode: ForecastMode,
}

/// Geolocation collaborator: city name to coordinates and timezone.
#[async_trait]
pub trait GeoProvider: Send + Sync + Debug {
    async fn locate(&self, city: &str) -> Result<GeoLocation, ForecastError>;
}

/// Weather collaborator: coordinates and a day count to raw daily arrays.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn daily_forecast(&self, query: &ForecastQuery) -> Result<DailyArrays, ForecastError>;
}

/// HTTP client shared by both collaborators, with the bounded timeout.
pub(crate) fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back off to a char boundary so a multi-byte character straddling
        // the cut cannot panic the slice.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
