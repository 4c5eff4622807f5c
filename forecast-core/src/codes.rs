use std::collections::HashMap;
use tracing::warn;

const BUNDLED_CODES: &str = include_str!("../data/weather_codes.json");
const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Read-only table mapping WMO weather codes to human-readable descriptions.
///
/// The table is advisory, not authoritative: a code it has never heard of
/// resolves to `"Unknown"`, and a malformed resource degrades the table to
/// an empty mapping (with a startup warning) instead of taking the process
/// down. Availability over completeness.
#[derive(Debug, Clone, Default)]
pub struct WeatherCodeTable {
    descriptions: HashMap<i64, String>,
}

impl WeatherCodeTable {
    /// Load the mapping bundled with the crate.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_CODES)
    }

    /// Parse a `{"<code>": "<description>"}` JSON document. Parse failures
    /// degrade to an empty table; non-integer keys are skipped. Either case
    /// is logged as a warning.
    pub fn from_json(raw: &str) -> Self {
        let parsed: HashMap<String, String> = match serde_json::from_str(raw) {
            Ok(map) => map,
            Err(e) => {
                warn!("failed to parse weather code table, all lookups will be Unknown: {e}");
                return Self::default();
            }
        };

        let mut descriptions = HashMap::with_capacity(parsed.len());
        for (key, description) in parsed {
            match key.parse::<i64>() {
                Ok(code) => {
                    descriptions.insert(code, description);
                }
                Err(_) => warn!("skipping non-integer weather code key '{key}'"),
            }
        }

        Self { descriptions }
    }

    /// Look up the description for a weather code. Never fails.
    pub fn describe(&self, code: i64) -> &str {
        self.descriptions.get(&code).map_or(UNKNOWN_DESCRIPTION, String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}
