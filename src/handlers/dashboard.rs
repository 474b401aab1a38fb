use axum::{extract::State, response::Json};

use crate::{
    errors::{ApiError, Operation, ResultExt},
    models::DashboardSummary,
    AppState,
};

/// Aggregate burnout statistics for the HR dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 500, description = "Summary unavailable", body = crate::errors::ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let summary = state
        .workforce
        .dashboard_summary()
        .await
        .during(Operation::Dashboard)?;

    Ok(Json(summary))
}
