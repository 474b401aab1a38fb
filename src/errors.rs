use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

fn current_request_id() -> Option<String> {
    crate::tracing::current_request_id().map(|rid| rid.as_str().to_string())
}

/// Error body returned by every endpoint on failure.
///
/// Carries only a generic per-operation message. Causes go to the log.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "error": "Failed to process prediction" }))]
pub struct ErrorResponse {
    #[schema(example = "Failed to process prediction")]
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::ExternalServiceError(err.to_string())
    }
}

/// The HTTP operation an error occurred in. Determines the generic message
/// the client sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Dashboard,
    Employees,
    Predict,
    Survey,
}

impl Operation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Dashboard => "Failed to fetch dashboard data",
            Operation::Employees => "Failed to fetch employees",
            Operation::Predict => "Failed to process prediction",
            Operation::Survey => "Failed to submit survey",
        }
    }
}

/// API Error type for HTTP responses
#[derive(Debug, thiserror::Error)]
#[error("{}: {source}", .operation.failure_message())]
pub struct ApiError {
    pub operation: Operation,
    #[source]
    pub source: ServiceError,
}

impl ApiError {
    pub fn new(operation: Operation, source: ServiceError) -> Self {
        Self { operation, source }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Attaches the failing operation to a service-level result.
pub trait ResultExt<T> {
    fn during(self, operation: Operation) -> Result<T, ApiError>;
}

impl<T> ResultExt<T> for Result<T, ServiceError> {
    fn during(self, operation: Operation) -> Result<T, ApiError> {
        self.map_err(|source| ApiError::new(operation, source))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = current_request_id().unwrap_or_else(|| "-".to_string());
        error!(
            request_id = %request_id,
            operation = ?self.operation,
            "{}",
            self
        );

        let body = ErrorResponse {
            error: self.operation.failure_message().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
