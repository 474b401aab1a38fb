use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::RiskTier;

/// Inbound body of `POST /api/predict`.
///
/// Every field is optional and loosely typed: numbers may arrive as strings,
/// and anything that does not coerce to a usable number falls back to a
/// default during scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub work_hours: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub stress: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
}

impl PredictionInput {
    /// Extracts the known fields from an arbitrary JSON body. Non-object
    /// bodies have no fields.
    pub fn from_body(body: &Value) -> Self {
        let field = |key: &str| body.as_object().and_then(|map| map.get(key)).cloned();
        Self {
            name: field("name"),
            work_hours: field("work_hours"),
            stress: field("stress"),
            email: field("email"),
        }
    }
}

/// Result of local rule-based scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    pub risk: RiskTier,
    /// Not clamped; extreme inputs can push it above 100 or below 0
    pub score: i64,
}

/// Body posted to the Watson and Hedera sibling endpoints.
///
/// Absent values are omitted rather than sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,
}

impl NotificationPayload {
    /// Builds the payload from the caller's name and whatever result the
    /// prediction produced, local or forwarded.
    pub fn new(name: Option<Value>, result: &Value) -> Self {
        let field = |key: &str| {
            result
                .as_object()
                .and_then(|map: &Map<String, Value>| map.get(key))
                .cloned()
        };
        Self {
            name,
            risk: field("risk"),
            score: field("score"),
        }
    }
}
