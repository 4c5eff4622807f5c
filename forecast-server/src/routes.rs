use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

use forecast_core::{ForecastError, ForecastResult, ForecastService};

/// City used when the query string does not name one.
const DEFAULT_CITY: &str = "Lisbon";

pub fn router(service: Arc<ForecastService>) -> Router {
    Router::new()
        .route("/temperature", get(temperature))
        .route("/rain", get(rain))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct ForecastParams {
    city: Option<String>,
    // Kept as a raw string so a malformed value becomes a JSON validation
    // error instead of the extractor's plain-text rejection.
    days: Option<String>,
}

impl ForecastParams {
    fn city(&self) -> &str {
        self.city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    fn days(&self) -> Result<u32, ForecastError> {
        match self.days.as_deref() {
            None => Ok(0),
            Some(raw) => raw.parse().map_err(|_| {
                ForecastError::validation(format!(
                    "days must be a non-negative integer, got '{raw}'"
                ))
            }),
        }
    }
}

async fn temperature(
    State(service): State<Arc<ForecastService>>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<ForecastResult>, ApiError> {
    let result = service.temperature_forecast(params.city(), params.days()?).await?;
    Ok(Json(result))
}

async fn rain(
    State(service): State<Arc<ForecastService>>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<ForecastResult>, ApiError> {
    let result = service.rain_forecast(params.city(), params.days()?).await?;
    Ok(Json(result))
}

/// Wire-level rendering of a typed failure: a machine-readable kind plus a
/// message, never a stack trace.
pub struct ApiError(ForecastError);

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            ForecastError::Validation { .. } => StatusCode::BAD_REQUEST,
            ForecastError::Collaborator { .. } => StatusCode::BAD_GATEWAY,
            ForecastError::Shaping { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !self.0.is_client_error() {
            warn!(kind = self.0.kind(), "request failed: {}", self.0);
        }

        let body = serde_json::json!({
            "error": self.0.kind(),
            "message": self.0.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
