use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::activities::models::{ActivitiesResponse, ActivityScore, ActivityType};
use crate::error::ErrorResponse;
use crate::forecast::models::{DailyRecord, HourlyRecord, Location, NormalizedForecast};
use crate::geocoding::models::City;

/// OpenAPI documentation for the Tripcast API
///
/// Schema-only for now; handlers carry no path annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tripcast API",
        version = "1.0.0",
        description = "Ranks skiing, surfing, indoor and outdoor sightseeing for a location using Open-Meteo forecasts.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    tags(
        (name = "activities", description = "Activity suitability rankings"),
        (name = "forecast", description = "Normalized weather forecasts"),
        (name = "cities", description = "City search")
    ),
    components(
        schemas(
            ErrorResponse,
            City,
            Location,
            HourlyRecord,
            DailyRecord,
            NormalizedForecast,
            ActivityType,
            ActivityScore,
            ActivitiesResponse,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
