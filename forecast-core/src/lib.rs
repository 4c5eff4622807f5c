//! Core library for the forecast gateway.
//!
//! This crate defines:
//! - Configuration read once from the environment
//! - The weather-code description table
//! - Forecast shaping (day windows, unit labeling, rain relabeling)
//! - Abstraction over the geolocation and weather collaborators
//! - The orchestration service tying the above together
//!
//! It is used by `forecast-server`, but can also be reused by other
//! binaries or services.

pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod shape;

pub use codes::WeatherCodeTable;
pub use config::Config;
pub use error::{Collaborator, ConfigError, ForecastError};
pub use model::{DayForecast, DayWindow, ForecastMode, ForecastResult, RainDay, TemperatureDay};
pub use provider::{ForecastProvider, ForecastQuery, GeoLocation, GeoProvider};
pub use service::ForecastService;
pub use shape::{DailyArrays, shape};
