use axum::{response::Json, routing::get, Router};
use utoipa::OpenApi;

use crate::AppState;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "WellMind API",
        description = r#"
# WellMind Burnout Dashboard API

Endpoints backing the employee burnout-risk dashboard.

## Error Handling

Every failure is reported as HTTP 500 with a single generic message:

```json
{ "error": "Failed to process prediction" }
```
"#
    ),
    tags(
        (name = "Dashboard", description = "Aggregate burnout statistics"),
        (name = "Employees", description = "Employee roster"),
        (name = "Prediction", description = "Burnout risk scoring"),
        (name = "Survey", description = "Survey intake"),
        (name = "Health", description = "Service liveness")
    ),
    paths(
        crate::handlers::dashboard::get_dashboard,
        crate::handlers::employees::list_employees,
        crate::handlers::predict::predict,
        crate::handlers::survey::submit_survey,
        crate::handlers::health::health
    ),
    components(
        schemas(
            crate::models::DashboardSummary,
            crate::models::DepartmentRisk,
            crate::models::EmployeeRecord,
            crate::models::RiskTier,
            crate::models::PredictionInput,
            crate::models::PredictionResult,
            crate::handlers::survey::SurveyAck,
            crate::handlers::survey::SurveySubmission,
            crate::handlers::health::HealthResponse,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

/// Serves the generated document at [`OPENAPI_PATH`].
pub fn openapi_routes() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}
