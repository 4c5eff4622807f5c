//! Forecast shaping: turning the provider's column-oriented daily arrays
//! into per-day, human-labeled records.
//!
//! Shaping is pure: it touches no ambient state and performs no I/O, which
//! is what keeps the only non-trivial logic in this system unit-testable
//! without a network.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::codes::WeatherCodeTable;
use crate::error::ForecastError;
use crate::model::{DayForecast, DayWindow, ForecastMode, ForecastResult, RainDay, TemperatureDay};

/// Weather codes below this value denote non-precipitation conditions,
/// except for the snow family.
const RAIN_CODE_THRESHOLD: i64 = 50;

/// Snow-family codes. Snow still counts as precipitation and must never be
/// relabeled "No Rain".
const SNOW_CODES: [i64; 4] = [71, 73, 75, 77];

const NO_RAIN_PREFIX: &str = "No Rain - ";

/// The provider's column-oriented daily response: parallel ordered arrays
/// keyed by field name. Only the columns relevant to the requested mode are
/// populated; the rest deserialize to empty vectors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyArrays {
    #[serde(default)]
    pub time: Vec<NaiveDate>,
    #[serde(default)]
    pub weather_code: Vec<i64>,

    // Temperature columns.
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub apparent_temperature_max: Vec<f64>,
    #[serde(default)]
    pub apparent_temperature_min: Vec<f64>,
    #[serde(default)]
    pub sunrise: Vec<String>,
    #[serde(default)]
    pub sunset: Vec<String>,

    // Rain columns.
    #[serde(default)]
    pub rain_sum: Vec<f64>,
    #[serde(default)]
    pub showers_sum: Vec<f64>,
    #[serde(default)]
    pub precipitation_probability_max: Vec<f64>,
    #[serde(default)]
    pub wind_speed_10m_max: Vec<f64>,
}

/// Shape raw daily arrays into a date-keyed forecast.
///
/// Indices advance monotonically from `window.start_offset`; any required
/// column shorter than `window.required_days()` is a [`ForecastError::Shaping`]
/// rather than a silently truncated result.
pub fn shape(
    city: &str,
    timezone: &str,
    daily: &DailyArrays,
    window: DayWindow,
    mode: ForecastMode,
    codes: &WeatherCodeTable,
) -> Result<ForecastResult, ForecastError> {
    let mut forecast = ForecastResult::new();

    for i in 0..window.count {
        let idx = window.start_offset + i;

        let date = *pick(&daily.time, "time", idx)?;
        let code = *pick(&daily.weather_code, "weather_code", idx)?;

        let day = match mode {
            ForecastMode::Temperature => DayForecast::Temperature(TemperatureDay {
                city: city.to_string(),
                date,
                timezone: timezone.to_string(),
                description: codes.describe(code).to_string(),
                max_temperature: celsius(*pick(&daily.temperature_2m_max, "temperature_2m_max", idx)?),
                min_temperature: celsius(*pick(&daily.temperature_2m_min, "temperature_2m_min", idx)?),
                apparent_max_temperature: celsius(*pick(
                    &daily.apparent_temperature_max,
                    "apparent_temperature_max",
                    idx,
                )?),
                apparent_min_temperature: celsius(*pick(
                    &daily.apparent_temperature_min,
                    "apparent_temperature_min",
                    idx,
                )?),
                sunrise_time: gmt(pick(&daily.sunrise, "sunrise", idx)?),
                sunset_time: gmt(pick(&daily.sunset, "sunset", idx)?),
            }),
            ForecastMode::Rain => DayForecast::Rain(RainDay {
                city: city.to_string(),
                date,
                timezone: timezone.to_string(),
                description: rain_description(code, codes),
                rain_sum: millimeters(*pick(&daily.rain_sum, "rain_sum", idx)?),
                showers_sum: millimeters(*pick(&daily.showers_sum, "showers_sum", idx)?),
                precipitation_probability: percent(*pick(
                    &daily.precipitation_probability_max,
                    "precipitation_probability_max",
                    idx,
                )?),
                wind_speed_max: kmh(*pick(&daily.wind_speed_10m_max, "wind_speed_10m_max", idx)?),
            }),
        };

        forecast.insert(date, day);
    }

    Ok(forecast)
}

/// Rain-mode description: codes below the precipitation threshold get the
/// `"No Rain - "` prefix, unless they belong to the snow family.
fn rain_description(code: i64, codes: &WeatherCodeTable) -> String {
    let description = codes.describe(code);

    if code < RAIN_CODE_THRESHOLD && !SNOW_CODES.contains(&code) {
        format!("{NO_RAIN_PREFIX}{description}")
    } else {
        description.to_string()
    }
}

fn pick<'a, T>(column: &'a [T], name: &str, idx: usize) -> Result<&'a T, ForecastError> {
    column.get(idx).ok_or_else(|| {
        ForecastError::shaping(format!(
            "daily column '{name}' has {} rows, but row {idx} is required",
            column.len()
        ))
    })
}

fn celsius(value: f64) -> String {
    format!("{value}°C")
}

fn millimeters(value: f64) -> String {
    format!("{value} mm")
}

fn percent(value: f64) -> String {
    format!("{value}%")
}

fn kmh(value: f64) -> String {
    format!("{value} km/h")
}

fn gmt(time: &str) -> String {
    format!("{time} GMT")
}
