use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Open-Meteo Forecast Response (Internal)
// Every field the normalizer needs is optional here so a missing field becomes a
// DataShapeError rather than an opaque deserialization failure.
// ============================================================================

#[allow(dead_code)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderForecast {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub timezone: Option<String>,
    pub current: Option<ProviderCurrent>,
    pub hourly: Option<ProviderHourly>,
    pub daily: Option<ProviderDaily>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderCurrent {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub precipitation: Option<f64>,
    pub weather_code: Option<i32>,
    pub snow_depth: Option<f64>,
}

/// Parallel arrays, index-aligned to `time`. Entries are null past a model's horizon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderHourly {
    pub time: Option<Vec<String>>,
    pub temperature_2m: Option<Vec<Option<f64>>>,
    pub wind_speed_10m: Option<Vec<Option<f64>>>,
    pub precipitation: Option<Vec<Option<f64>>>,
    pub weather_code: Option<Vec<Option<i32>>>,
    /// Absent for locations the model has no snow data for; entries may be null
    pub snow_depth: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderDaily {
    pub time: Option<Vec<String>>,
    pub weather_code: Option<Vec<Option<i32>>>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    pub wind_speed_10m_max: Option<Vec<Option<f64>>>,
}

// ============================================================================
// Normalized Forecast (External - what scoring consumes and clients receive)
// ============================================================================

/// Where a forecast was requested for
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Location {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// A location known only by its coordinates
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            name: format!("{:.4}, {:.4}", latitude, longitude),
            country: None,
            region: None,
            latitude,
            longitude,
        }
    }
}

/// One hour of forecast data
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HourlyRecord {
    /// ISO 8601 local time in the forecast timezone
    pub time: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// km/h
    pub wind_speed: f64,
    /// mm for the hour
    pub precipitation: f64,
    /// WMO code; 0-3 are clear to partly cloudy
    pub weather_code: i32,
    /// Metres. `None` means the provider reported nothing, which is not the same as zero.
    pub snow_depth: Option<f64>,
}

/// One calendar day's aggregate, carried for display only
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyRecord {
    pub date: String,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub precipitation_sum: f64,
    pub wind_speed_max: f64,
    pub weather_code: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NormalizedForecast {
    pub location: Location,
    pub timezone: String,
    pub current: HourlyRecord,
    /// Chronological; index 0 is the current or nearest future hour
    pub hourly: Vec<HourlyRecord>,
    pub daily: Vec<DailyRecord>,
}

/// What a forecast request is for, before resolution
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastTarget {
    City(String),
    Coordinates {
        latitude: f64,
        longitude: f64,
        timezone: Option<String>,
    },
}
