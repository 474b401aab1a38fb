use serde_json::{json, Value};
use tracing::{error, info, instrument};

use crate::errors::ServiceError;
use crate::models::{NotificationPayload, PredictionInput};
use crate::notifications::RiskNotifier;
use crate::services::scoring;

/// Message attached to the fallback result when forwarding fails.
pub const BACKEND_ERROR_MESSAGE: &str = "AI backend error";

/// Result substituted when the external prediction service cannot be used.
pub fn backend_fallback() -> Value {
    json!({
        "risk": "Unknown",
        "score": 0,
        "error": BACKEND_ERROR_MESSAGE,
    })
}

/// Where a prediction comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionMode {
    /// Rule-based scoring in-process
    Local,
    /// Forward the raw body to an external service and relay its answer
    Remote { url: String },
}

impl PredictionMode {
    pub fn from_backend(url: Option<&str>) -> Self {
        match url {
            Some(url) => PredictionMode::Remote {
                url: url.to_string(),
            },
            None => PredictionMode::Local,
        }
    }
}

#[derive(Clone)]
pub struct PredictionService {
    client: reqwest::Client,
    mode: PredictionMode,
    notifier: RiskNotifier,
}

impl PredictionService {
    pub fn new(client: reqwest::Client, mode: PredictionMode, notifier: RiskNotifier) -> Self {
        Self {
            client,
            mode,
            notifier,
        }
    }

    pub fn mode(&self) -> &PredictionMode {
        &self.mode
    }

    /// Produces a prediction for `body` and notifies the sibling
    /// integrations before returning it.
    ///
    /// Forwarding failures are absorbed into [`backend_fallback`]; only a
    /// local result that cannot be serialized is an error.
    #[instrument(skip(self, body))]
    pub async fn predict(&self, body: &Value) -> Result<Value, ServiceError> {
        let input = PredictionInput::from_body(body);

        let result = match &self.mode {
            PredictionMode::Remote { url } => match self.forward(url, body).await {
                Ok(value) => value,
                Err(e) => {
                    error!(backend = %url, "prediction backend failed: {}", e);
                    backend_fallback()
                }
            },
            PredictionMode::Local => serde_json::to_value(scoring::score_input(&input))?,
        };

        info!(
            risk = %result.get("risk").unwrap_or(&serde_json::Value::Null),
            score = %result.get("score").unwrap_or(&serde_json::Value::Null),
            "prediction computed"
        );

        let payload = NotificationPayload::new(input.name, &result);
        self.notifier.notify(&payload).await;

        Ok(result)
    }

    /// Posts `body` to the external service and returns its JSON reply
    /// untouched. Non-2xx statuses and non-JSON bodies are errors.
    async fn forward(&self, url: &str, body: &Value) -> Result<Value, ServiceError> {
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::ExternalServiceError(format!(
                "prediction backend responded with status {}",
                status
            )));
        }

        Ok(response.json::<Value>().await?)
    }
}
