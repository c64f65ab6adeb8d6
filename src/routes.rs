use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, routing::get, Json, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::activities::handlers as activities_handlers;
use crate::error::handle_middleware_error;
use crate::forecast::handlers as forecast_handlers;
use crate::geocoding::handlers as geocoding_handlers;
use crate::openapi::swagger_ui;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the city search routes
fn geocoding_routes() -> Router<AppState> {
    Router::new().route("/cities/search", get(geocoding_handlers::search_cities))
}

/// Build the forecast API routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(forecast_handlers::get_forecast))
        .route("/forecast/{city}", get(forecast_handlers::get_forecast))
}

/// Build the activity ranking routes
fn activities_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(activities_handlers::get_activities))
        .route(
            "/activities/{city}",
            get(activities_handlers::get_activities),
        )
}

/// Build all API v1 routes
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(geocoding_routes())
        .merge(forecast_routes())
        .merge(activities_routes())
}

/// Build the complete application router
pub fn build_router() -> Router<AppState> {
    Router::new()
        // Health check at root level
        .route("/", get(health))
        .route("/health", get(health))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
        // Swagger UI for API documentation
        .merge(swagger_ui())
}

/// Wrap a router in the request timeout, tracing, CORS and compression layers
pub fn with_middleware<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}
