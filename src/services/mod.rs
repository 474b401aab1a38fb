use std::time::Duration;

use crate::errors::ServiceError;

pub mod prediction;
pub mod scoring;

/// Builds the HTTP client shared by every outbound call. `timeout` bounds
/// each request end to end.
pub fn outbound_client(timeout: Duration) -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("wellmind-api/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ServiceError::InternalError(format!("failed to build HTTP client: {}", e)))
}
