use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::ForecastError;

/// Provider hard limit on how many forecast days can be requested.
pub const MAX_REQUESTED_DAYS: u32 = 16;

/// Which of the two response shapes a request wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastMode {
    Temperature,
    Rain,
}

impl ForecastMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMode::Temperature => "temperature",
            ForecastMode::Rain => "rain",
        }
    }
}

impl std::fmt::Display for ForecastMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contiguous slice of the provider's daily arrays selected for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// Index of the first day to extract.
    pub start_offset: usize,
    /// Number of consecutive days to extract.
    pub count: usize,
}

impl DayWindow {
    /// Derive the window from the caller's `days` parameter.
    ///
    /// `days == 0` does NOT mean "just today": it selects the default window
    /// of four days starting three days out (today+3 through today+6). Any
    /// explicit `days >= 1` selects `days + 1` entries starting today
    /// (today through today+days). The asymmetry is deliberate and callers
    /// rely on it.
    pub fn from_requested_days(days: u32) -> Result<Self, ForecastError> {
        if days > MAX_REQUESTED_DAYS {
            return Err(ForecastError::validation(format!(
                "days must be at most {MAX_REQUESTED_DAYS}, got {days}"
            )));
        }

        if days == 0 {
            Ok(Self { start_offset: 3, count: 4 })
        } else {
            Ok(Self { start_offset: 0, count: days as usize + 1 })
        }
    }

    /// How many forecast days the provider must return to cover this window.
    pub fn required_days(&self) -> usize {
        self.start_offset + self.count
    }
}

/// One shaped day of a temperature forecast. All values are preformatted
/// strings carrying their unit (`°C`) or timezone label (`GMT`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemperatureDay {
    pub city: String,
    pub date: NaiveDate,
    pub timezone: String,
    pub description: String,
    pub max_temperature: String,
    pub min_temperature: String,
    pub apparent_max_temperature: String,
    pub apparent_min_temperature: String,
    pub sunrise_time: String,
    pub sunset_time: String,
}

/// One shaped day of a rain forecast. Numeric fields carry their unit
/// suffix (`mm`, `%`, `km/h`); the description is prefixed `"No Rain - "`
/// for non-precipitation weather codes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RainDay {
    pub city: String,
    pub date: NaiveDate,
    pub timezone: String,
    pub description: String,
    pub rain_sum: String,
    pub showers_sum: String,
    pub precipitation_probability: String,
    pub wind_speed_max: String,
}

/// A shaped day in either mode. Serializes as the inner struct, so the wire
/// shape depends only on which endpoint was called.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum DayForecast {
    Temperature(TemperatureDay),
    Rain(RainDay),
}

/// Date-keyed forecast, one entry per day in the window. `BTreeMap` keeps
/// key order chronological both for iteration and serialization.
pub type ForecastResult = BTreeMap<NaiveDate, DayForecast>;
