use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wellmind_api::{
    build_router, config::AppConfig, repositories::WorkforceRepository, AppState,
};

/// Points at a port nothing listens on, so outbound calls fail fast.
pub const UNREACHABLE_BASE: &str = "http://127.0.0.1:1";

/// Helper harness wrapping the fully layered router.
pub struct TestApp {
    router: Router,
    #[allow(dead_code)]
    pub state: AppState,
}

/// Decoded response from the test router.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Test application with local scoring and unreachable notification
    /// endpoints.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_config(Self::config(None, UNREACHABLE_BASE))
    }

    /// Configuration with a short outbound timeout suitable for tests.
    pub fn config(ai_backend_url: Option<String>, notify_base_url: &str) -> AppConfig {
        AppConfig {
            environment: "test".to_string(),
            ai_backend_url,
            notify_base_url: notify_base_url.to_string(),
            outbound_timeout_secs: 1,
            cors_allow_any_origin: true,
            ..AppConfig::default()
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::from_config(config).expect("failed to build test state");
        Self::from_state(state)
    }

    #[allow(dead_code)]
    pub fn with_workforce(workforce: Arc<dyn WorkforceRepository>) -> Self {
        let state = AppState::with_workforce(Self::config(None, UNREACHABLE_BASE), workforce)
            .expect("failed to build test state");
        Self::from_state(state)
    }

    fn from_state(state: AppState) -> Self {
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    /// Send a raw-bodied request against the router.
    pub async fn request_raw(&self, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(raw) => {
                builder = builder.header("content-type", "application/json");
                Body::from(raw.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("failed to build request"))
            .await
            .expect("router error during test request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    #[allow(dead_code)]
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request_raw(Method::GET, uri, None).await
    }

    #[allow(dead_code)]
    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        let raw = serde_json::to_string(body).expect("failed to serialize json request body");
        self.request_raw(Method::POST, uri, Some(&raw)).await
    }
}
