use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Json,
};
use serde_json::Value;

use crate::{
    errors::{ApiError, Operation, ResultExt},
    handlers::common::read_json_body,
    models::{PredictionInput, PredictionResult},
    AppState,
};

/// Predict burnout risk from survey answers.
///
/// When an external prediction service is configured its JSON reply is
/// relayed as-is; otherwise the rule-based score is returned. Either way the
/// Watson and Hedera integrations are notified before responding.
#[utoipa::path(
    post,
    path = "/api/predict",
    request_body = PredictionInput,
    responses(
        (status = 200, description = "Prediction (may carry extra fields from the external service)", body = PredictionResult),
        (status = 500, description = "Body was not valid JSON or could not be read", body = crate::errors::ErrorResponse)
    ),
    tag = "Prediction"
)]
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let payload = read_json_body(body).during(Operation::Predict)?;

    let result = state
        .predictions
        .predict(&payload)
        .await
        .during(Operation::Predict)?;

    Ok(Json(result))
}
