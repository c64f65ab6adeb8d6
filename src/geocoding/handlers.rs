use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::models::City;
use super::service::GeocodingError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CitySearchQuery {
    /// City name or prefix
    pub name: String,
    /// Maximum number of results (1-20, default 5)
    pub count: Option<u8>,
}

/// Search cities by name
///
/// GET /cities/search?name=Zermatt&count=5
pub async fn search_cities(
    State(state): State<AppState>,
    Query(query): Query<CitySearchQuery>,
) -> Result<Json<Vec<City>>, GeocodingError> {
    let cities = state
        .geocoding_service
        .search(&query.name, query.count)
        .await?;
    Ok(Json(cities))
}
