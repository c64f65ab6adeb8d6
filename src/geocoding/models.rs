use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::forecast::models::Location;

// ============================================================================
// Open-Meteo Geocoding API Response (Internal)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Omitted entirely when nothing matches
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub admin1: Option<String>,
    pub timezone: Option<String>,
}

/// Error body Open-Meteo returns with a 4xx
#[derive(Debug, Deserialize)]
pub struct ProviderErrorBody {
    pub reason: String,
}

// ============================================================================
// API Response Models (External - what we return to clients)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct City {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone, or `auto` when the provider did not report one
    pub timezone: String,
}

impl From<GeocodingResult> for City {
    fn from(r: GeocodingResult) -> Self {
        City {
            id: r.id,
            name: r.name,
            country: r.country,
            country_code: r.country_code,
            admin1: r.admin1,
            latitude: r.latitude,
            longitude: r.longitude,
            timezone: r.timezone.unwrap_or_else(|| "auto".to_string()),
        }
    }
}

impl From<&City> for Location {
    fn from(city: &City) -> Self {
        Location {
            name: city.name.clone(),
            country: city.country.clone(),
            region: city.admin1.clone(),
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}
