use axum::{extract::State, Json};

use super::models::ActivitiesResponse;
use super::scoring::rank_activities;
use crate::extractors::LocationParam;
use crate::forecast::ForecastError;
use crate::AppState;

/// Rank activities for the next 24 hours at a location
///
/// GET /activities?city=Biarritz
/// GET /activities?latitude=43.48&longitude=-1.56
/// GET /activities/{city}
pub async fn get_activities(
    State(state): State<AppState>,
    location: LocationParam,
) -> Result<Json<ActivitiesResponse>, ForecastError> {
    let target = location.or_default_city(state.config.default_city.clone());
    let forecast = state.forecast_service.forecast_for(&target).await?;
    let ranked = rank_activities(&forecast);

    Ok(Json(ActivitiesResponse {
        location: forecast.location,
        timezone: forecast.timezone,
        activities: ranked.into_inner(),
    }))
}
