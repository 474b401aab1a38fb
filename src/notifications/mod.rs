//! Best-effort notifications to the sibling Watson and Hedera integrations.
//!
//! Delivery failures never reach the caller of [`RiskNotifier::notify`];
//! they are logged and dropped. No retries.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::NotificationPayload;

pub const WATSON_PATH: &str = "/api/watson";
pub const HEDERA_PATH: &str = "/api/hedera";

/// Notification delivery errors
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint responded with status {0}")]
    Status(StatusCode),
}

/// A named endpoint that receives risk notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTarget {
    pub name: &'static str,
    pub url: String,
}

impl NotificationTarget {
    pub fn new(name: &'static str, base_url: &str, path: &str) -> Self {
        Self {
            name,
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
        }
    }
}

#[derive(Clone)]
pub struct RiskNotifier {
    client: reqwest::Client,
    watson: NotificationTarget,
    hedera: NotificationTarget,
}

impl RiskNotifier {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            watson: NotificationTarget::new("watson", base_url, WATSON_PATH),
            hedera: NotificationTarget::new("hedera", base_url, HEDERA_PATH),
        }
    }

    pub fn targets(&self) -> [&NotificationTarget; 2] {
        [&self.watson, &self.hedera]
    }

    /// Sends `payload` to both targets concurrently and waits for both to
    /// finish or fail.
    pub async fn notify(&self, payload: &NotificationPayload) {
        let (watson, hedera) = tokio::join!(
            self.deliver(&self.watson, payload),
            self.deliver(&self.hedera, payload)
        );

        for (target, outcome) in [(&self.watson, watson), (&self.hedera, hedera)] {
            match outcome {
                Ok(()) => debug!(integration = target.name, "risk notification delivered"),
                Err(e) => warn!(integration = target.name, url = %target.url, "risk notification failed: {}", e),
            }
        }
    }

    #[instrument(skip(self, payload), fields(integration = target.name))]
    pub async fn deliver(
        &self,
        target: &NotificationTarget,
        payload: &NotificationPayload,
    ) -> Result<(), NotificationError> {
        let response = self.client.post(&target.url).json(payload).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(NotificationError::Status(status))
        }
    }
}
