use axum::{
    extract::{FromRequestParts, Path, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::ErrorResponse;
use crate::forecast::models::ForecastTarget;

/// Query parameters for forecast/activity requests
#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    /// City name from query string
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// IANA timezone name, only used with coordinates
    pub timezone: Option<String>,
}

impl LocationQuery {
    fn into_target(self) -> Result<Option<ForecastTarget>, LocationParamRejection> {
        if let Some(city) = self.city.filter(|c| !c.trim().is_empty()) {
            return Ok(Some(ForecastTarget::City(city)));
        }

        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Some(ForecastTarget::Coordinates {
                latitude,
                longitude,
                timezone: self.timezone,
            })),
            (None, None) => Ok(None),
            _ => Err(LocationParamRejection(
                "latitude and longitude must be given together".to_string(),
            )),
        }
    }
}

/// Extracts the forecast location from the request
///
/// Checks the path city first, then a `city` query parameter, then
/// `latitude`/`longitude` (with optional `timezone`).
/// Returns None if no location is provided at all.
#[derive(Debug)]
pub struct LocationParam(pub Option<ForecastTarget>);

impl LocationParam {
    /// Get the location or fall back to a default city
    pub fn or_default_city(self, default: impl Into<String>) -> ForecastTarget {
        self.0
            .unwrap_or_else(|| ForecastTarget::City(default.into()))
    }
}

impl<S> FromRequestParts<S> for LocationParam
where
    S: Send + Sync,
{
    type Rejection = LocationParamRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Try to extract city from path first
        if let Ok(Path(city)) = Path::<String>::from_request_parts(parts, state).await {
            if !city.trim().is_empty() {
                return Ok(LocationParam(Some(ForecastTarget::City(city))));
            }
        }

        let Query(query) = Query::<LocationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| LocationParamRejection(e.body_text()))?;

        query.into_target().map(LocationParam)
    }
}

/// Rejection type for location extraction failures
#[derive(Debug)]
pub struct LocationParamRejection(pub String);

impl IntoResponse for LocationParamRejection {
    fn into_response(self) -> Response {
        tracing::debug!(reason = %self.0, "Rejected location parameters");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_code(self.0, "INVALID_LOCATION")),
        )
            .into_response()
    }
}
