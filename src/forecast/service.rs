use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use thiserror::Error;

use super::models::*;
use super::normalize::{normalize, DataShapeError};
use crate::error::HttpError;
use crate::geocoding::models::ProviderErrorBody;
use crate::geocoding::{GeocodingError, GeocodingService};
use crate::impl_into_response;

const FORECAST_PATH: &str = "/v1/forecast";
const MAX_FORECAST_DAYS: u8 = 16;

/// Fields requested for both the current snapshot and each hour
const HOURLY_FIELDS: &str = "temperature_2m,wind_speed_10m,precipitation,weather_code,snow_depth";
const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max";

/// Lets Open-Meteo pick the timezone from the coordinates
pub const AUTO_TIMEZONE: &str = "auto";

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Failed to fetch data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Malformed forecast data: {0}")]
    DataShape(#[from] DataShapeError),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error(transparent)]
    Geocoding(#[from] GeocodingError),
}

impl HttpError for ForecastError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::RequestError(_) => StatusCode::BAD_GATEWAY,
            Self::ApiError(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::DataShape(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidCoordinates(_) => StatusCode::BAD_REQUEST,
            Self::InvalidTimezone(_) => StatusCode::BAD_REQUEST,
            Self::Geocoding(e) => e.status_code(),
        }
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::RequestError(_) => Some("REQUEST_ERROR"),
            Self::ApiError(_) => Some("API_ERROR"),
            Self::InvalidResponse(_) => Some("INVALID_RESPONSE"),
            Self::DataShape(_) => Some("DATA_SHAPE_ERROR"),
            Self::InvalidCoordinates(_) => Some("INVALID_COORDINATES"),
            Self::InvalidTimezone(_) => Some("INVALID_TIMEZONE"),
            Self::Geocoding(e) => e.error_code(),
        }
    }
}

impl_into_response!(ForecastError);

/// Source of raw forecast payloads
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<ProviderForecast, ForecastError>;
}

/// Open-Meteo forecast API client
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    forecast_days: u8,
}

impl OpenMeteoClient {
    pub fn new(client: Client, base_url: &str, forecast_days: u8) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            forecast_days: forecast_days.clamp(1, MAX_FORECAST_DAYS),
        }
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<ProviderForecast, ForecastError> {
        tracing::debug!(
            lat = %latitude,
            lon = %longitude,
            timezone = %timezone,
            "Fetching forecast"
        );

        let response = self
            .client
            .get(format!("{}{}", self.base_url, FORECAST_PATH))
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("timezone", timezone.to_string()),
                ("forecast_days", self.forecast_days.to_string()),
                ("current", HOURLY_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("temperature_unit", "celsius".to_string()),
                ("wind_speed_unit", "kmh".to_string()),
                ("precipitation_unit", "mm".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Received forecast response");

        if !status.is_success() {
            let reason = match response.json::<ProviderErrorBody>().await {
                Ok(body) => body.reason,
                Err(_) => format!("HTTP {}", status),
            };
            return Err(ForecastError::ApiError(reason));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ForecastError::InvalidResponse(e.to_string()))
    }
}

/// Resolves a location, fetches a fresh payload and normalizes it
pub struct ForecastService {
    geocoding: Arc<GeocodingService>,
    provider: Arc<dyn ForecastProvider>,
}

impl ForecastService {
    pub fn new(geocoding: Arc<GeocodingService>, provider: Arc<dyn ForecastProvider>) -> Self {
        Self {
            geocoding,
            provider,
        }
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ForecastError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ForecastError::InvalidCoordinates(format!(
                "latitude {} is outside -90..90",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ForecastError::InvalidCoordinates(format!(
                "longitude {} is outside -180..180",
                longitude
            )));
        }
        Ok(())
    }

    /// Accept IANA names and `auto`
    fn validate_timezone(timezone: &str) -> Result<(), ForecastError> {
        if timezone == AUTO_TIMEZONE || timezone.parse::<chrono_tz::Tz>().is_ok() {
            Ok(())
        } else {
            Err(ForecastError::InvalidTimezone(timezone.to_string()))
        }
    }

    pub async fn forecast_for(
        &self,
        target: &ForecastTarget,
    ) -> Result<NormalizedForecast, ForecastError> {
        match target {
            ForecastTarget::City(city) => self.forecast_for_city(city).await,
            ForecastTarget::Coordinates {
                latitude,
                longitude,
                timezone,
            } => {
                self.forecast_for_coordinates(*latitude, *longitude, timezone.as_deref())
                    .await
            }
        }
    }

    /// Forecast for the best geocoding match of `city`
    pub async fn forecast_for_city(&self, city: &str) -> Result<NormalizedForecast, ForecastError> {
        let resolved = self.geocoding.resolve(city).await?;

        tracing::debug!(
            city = %resolved.name,
            lat = %resolved.latitude,
            lon = %resolved.longitude,
            timezone = %resolved.timezone,
            "Resolved city"
        );

        let payload = self
            .provider
            .fetch_forecast(resolved.latitude, resolved.longitude, &resolved.timezone)
            .await?;

        Ok(normalize(payload, Location::from(&resolved))?)
    }

    /// Forecast for explicit coordinates; timezone defaults to `auto`
    pub async fn forecast_for_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: Option<&str>,
    ) -> Result<NormalizedForecast, ForecastError> {
        Self::validate_coordinates(latitude, longitude)?;
        let timezone = timezone.unwrap_or(AUTO_TIMEZONE);
        Self::validate_timezone(timezone)?;

        let payload = self
            .provider
            .fetch_forecast(latitude, longitude, timezone)
            .await?;

        Ok(normalize(
            payload,
            Location::from_coordinates(latitude, longitude),
        )?)
    }
}
