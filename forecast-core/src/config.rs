use crate::error::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Process configuration, read from the environment once at startup and
/// handed to the service layer as a plain struct.
///
/// Validation happens here, fail-fast: a missing required variable prevents
/// startup instead of surfacing mid-request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the weather collaborator, e.g. `https://api.open-meteo.com/v1/forecast`.
    pub weather_api_url: String,

    /// Base URL of the geolocation collaborator, e.g.
    /// `https://geocoding-api.open-meteo.com/v1/search`.
    pub geolocation_api_url: String,

    /// Fixed query-parameter string appended to temperature requests,
    /// e.g. `daily=weather_code,temperature_2m_max,...`.
    pub temperature_params: String,

    /// Fixed query-parameter string appended to rain requests.
    pub rain_params: String,

    /// Socket address the HTTP front-end listens on.
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::from_env`], but with an injectable variable source
    /// so validation is testable without touching process globals.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            weather_api_url: required(&lookup, "WEATHER_API_URL")?,
            geolocation_api_url: required(&lookup, "GEOLOCATION_API_URL")?,
            temperature_params: required(&lookup, "TEMPERATURE_PARAMS")?,
            rain_params: required(&lookup, "RAIN_PARAMS")?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        None => Err(ConfigError::MissingVar(name)),
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyVar(name)),
        Some(value) => Ok(value),
    }
}
