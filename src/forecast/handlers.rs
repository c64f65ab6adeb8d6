use axum::{extract::State, Json};

use super::models::NormalizedForecast;
use super::service::ForecastError;
use crate::extractors::LocationParam;
use crate::AppState;

/// Get the normalized forecast (current + hourly + daily)
///
/// GET /forecast?city=Zermatt
/// GET /forecast?latitude=46.02&longitude=7.75&timezone=Europe/Zurich
/// GET /forecast/{city}
pub async fn get_forecast(
    State(state): State<AppState>,
    location: LocationParam,
) -> Result<Json<NormalizedForecast>, ForecastError> {
    let target = location.or_default_city(state.config.default_city.clone());
    let forecast = state.forecast_service.forecast_for(&target).await?;
    Ok(Json(forecast))
}
