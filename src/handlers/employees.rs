use axum::{extract::State, response::Json};

use crate::{
    errors::{ApiError, Operation, ResultExt},
    models::EmployeeRecord,
    AppState,
};

/// List employees with their current burnout status
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Employee roster", body = Vec<EmployeeRecord>),
        (status = 500, description = "Roster unavailable", body = crate::errors::ErrorResponse)
    ),
    tag = "Employees"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeRecord>>, ApiError> {
    let employees = state
        .workforce
        .list_employees()
        .await
        .during(Operation::Employees)?;

    Ok(Json(employees))
}
