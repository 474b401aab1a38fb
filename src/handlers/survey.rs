use axum::{body::Bytes, extract::rejection::BytesRejection, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    errors::{ApiError, Operation, ResultExt},
    handlers::common::read_json_body,
};

pub const SURVEY_ACK_MESSAGE: &str = "Survey submitted successfully";

/// Free-form survey answers.
#[derive(Debug, Clone, ToSchema)]
#[schema(value_type = Object)]
pub struct SurveySubmission(pub serde_json::Value);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SurveyAck {
    pub success: bool,
    #[schema(example = "Survey submitted successfully")]
    pub message: String,
}

/// Accept a survey submission.
///
/// The payload is free-form and only logged.
#[utoipa::path(
    post,
    path = "/api/survey",
    request_body = SurveySubmission,
    responses(
        (status = 200, description = "Survey accepted", body = SurveyAck),
        (status = 500, description = "Body was not valid JSON or could not be read", body = crate::errors::ErrorResponse)
    ),
    tag = "Survey"
)]
pub async fn submit_survey(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SurveyAck>, ApiError> {
    let data = read_json_body(body).during(Operation::Survey)?;

    info!(survey = %data, "Survey data received");

    Ok(Json(SurveyAck {
        success: true,
        message: SURVEY_ACK_MESSAGE.to_string(),
    }))
}
