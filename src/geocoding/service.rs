use axum::http::StatusCode;
use reqwest::Client;
use thiserror::Error;

use super::models::*;
use crate::error::HttpError;
use crate::impl_into_response;

const SEARCH_PATH: &str = "/v1/search";
const DEFAULT_RESULT_COUNT: u8 = 5;
const MAX_RESULT_COUNT: u8 = 20;

#[derive(Error, Debug)]
pub enum GeocodingError {
    #[error("Failed to fetch data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

impl HttpError for GeocodingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CityNotFound(_) => StatusCode::NOT_FOUND,
            Self::RequestError(_) => StatusCode::BAD_GATEWAY,
            Self::ApiError(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::CityNotFound(_) => Some("CITY_NOT_FOUND"),
            Self::RequestError(_) => Some("REQUEST_ERROR"),
            Self::ApiError(_) => Some("API_ERROR"),
            Self::InvalidQuery(_) => Some("INVALID_QUERY"),
        }
    }
}

impl_into_response!(GeocodingError);

/// City search against the Open-Meteo geocoding API
pub struct GeocodingService {
    client: Client,
    base_url: String,
}

impl GeocodingService {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Clamp the requested result count to what we allow
    fn result_count(count: Option<u8>) -> u8 {
        count
            .unwrap_or(DEFAULT_RESULT_COUNT)
            .clamp(1, MAX_RESULT_COUNT)
    }

    /// Search cities by name. No match is an empty list, not an error.
    pub async fn search(&self, name: &str, count: Option<u8>) -> Result<Vec<City>, GeocodingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "name must not be empty".to_string(),
            ));
        }
        let count = Self::result_count(count);

        tracing::debug!(name = %name, count = count, "Searching cities");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, SEARCH_PATH))
            .query(&[
                ("name", name.to_string()),
                ("count", count.to_string()),
                ("language", "en".to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Received geocoding response");

        if !status.is_success() {
            let reason = match response.json::<ProviderErrorBody>().await {
                Ok(body) => body.reason,
                Err(_) => format!("HTTP {}", status),
            };
            return Err(GeocodingError::ApiError(format!(
                "Geocoding failed: {}",
                reason
            )));
        }

        let data: GeocodingResponse = response.json().await?;
        Ok(data.results.into_iter().map(City::from).collect())
    }

    /// Best match for a city name
    pub async fn resolve(&self, name: &str) -> Result<City, GeocodingError> {
        self.search(name, Some(1))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::CityNotFound(name.trim().to_string()))
    }
}
