//! WellMind API Library
//!
//! HTTP surface for the employee burnout-risk dashboard: summary statistics,
//! the employee roster, risk prediction and survey intake.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod models;
pub mod notifications;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

use crate::errors::ServiceError;
use crate::notifications::RiskNotifier;
use crate::repositories::{StaticWorkforceRepository, WorkforceRepository};
use crate::services::prediction::{PredictionMode, PredictionService};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub workforce: Arc<dyn WorkforceRepository>,
    pub predictions: PredictionService,
}

impl AppState {
    /// Wires the default services for `config`.
    pub fn from_config(config: config::AppConfig) -> Result<Self, ServiceError> {
        Self::with_workforce(config, Arc::new(StaticWorkforceRepository::new()))
    }

    /// Like [`AppState::from_config`] but with a caller-supplied roster source.
    pub fn with_workforce(
        config: config::AppConfig,
        workforce: Arc<dyn WorkforceRepository>,
    ) -> Result<Self, ServiceError> {
        let client = services::outbound_client(config.outbound_timeout())?;
        let notifier = RiskNotifier::new(client.clone(), &config.notify_base_url);
        let mode = PredictionMode::from_backend(config.prediction_backend());
        let predictions = PredictionService::new(client, mode, notifier);

        Ok(Self {
            config,
            workforce,
            predictions,
        })
    }
}

/// The `/api` routes, without middleware.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/employees", get(handlers::employees::list_employees))
        .route("/api/predict", post(handlers::predict::predict))
        .route("/api/survey", post(handlers::survey::submit_survey))
}

/// Builds the CORS layer from configuration.
///
/// Explicit origins win. Without them the layer is permissive in development
/// or when `cors_allow_any_origin` is set, and same-origin only otherwise.
pub fn cors_layer(config: &config::AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else if config.should_allow_permissive_cors() {
        CorsLayer::permissive()
    } else {
        ::tracing::warn!(
            "No CORS origins configured; set APP__CORS_ALLOWED_ORIGINS or APP__CORS_ALLOW_ANY_ORIGIN=true"
        );
        CorsLayer::new()
    }
}

/// Full application router: routes, OpenAPI document and middleware stack.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let timeout = state.config.request_timeout();

    api_routes()
        .merge(openapi::openapi_routes())
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
