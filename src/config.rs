use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_NOTIFY_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const CONFIG_DIR: &str = "config";

/// Variables read by the original Next.js deployment.
const LEGACY_AI_BACKEND_URL: &str = "AI_BACKEND_URL";
const LEGACY_PUBLIC_URL: &str = "NEXT_PUBLIC_URL";

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_timeouts", skip_on_field_errors = false))]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Application environment
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// External prediction service. When set, local scoring is bypassed and
    /// the request body is forwarded here.
    #[serde(default)]
    #[validate(custom = "validate_optional_url")]
    pub ai_backend_url: Option<String>,

    /// Base address of the Watson and Hedera notification endpoints
    #[serde(default = "default_notify_base_url")]
    #[validate(url)]
    pub notify_base_url: String,

    /// Timeout applied to every outbound call (seconds)
    #[serde(default = "default_outbound_timeout_secs")]
    #[validate(range(min = 1, max = 120))]
    pub outbound_timeout_secs: u64,

    /// Timeout applied to inbound requests (seconds). Must exceed a forward
    /// plus a notification round, i.e. twice `outbound_timeout_secs`.
    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1, max = 600))]
    pub request_timeout_secs: u64,

    /// CORS: comma-separated list of allowed origins
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    /// Allow permissive CORS outside development
    #[serde(default)]
    pub cors_allow_any_origin: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            ai_backend_url: None,
            notify_base_url: default_notify_base_url(),
            outbound_timeout_secs: default_outbound_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_allowed_origins: None,
            cors_allow_any_origin: false,
        }
    }
}

impl AppConfig {
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// The external prediction service, if one is configured. Blank values
    /// count as unset.
    pub fn prediction_backend(&self) -> Option<&str> {
        self.ai_backend_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn outbound_timeout(&self) -> Duration {
        Duration::from_secs(self.outbound_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parsed list of explicitly allowed CORS origins.
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn should_allow_permissive_cors(&self) -> bool {
        self.is_development() || self.cors_allow_any_origin
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Default value functions
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_notify_base_url() -> String {
    DEFAULT_NOTIFY_BASE_URL.to_string()
}

fn default_outbound_timeout_secs() -> u64 {
    DEFAULT_OUTBOUND_TIMEOUT_SECS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => {
            let mut err = ValidationError::new("invalid_log_level");
            err.message = Some("log_level must be one of trace, debug, info, warn, error".into());
            Err(err)
        }
    }
}

fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    match reqwest::Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => {
            let mut err = ValidationError::new("invalid_url");
            err.message = Some("ai_backend_url must be an http(s) URL".into());
            Err(err)
        }
    }
}

/// A prediction may wait on the backend and then on the notifiers, each
/// bounded by the outbound timeout.
fn validate_timeouts(cfg: &AppConfig) -> Result<(), ValidationError> {
    let worst_case = cfg.outbound_timeout_secs.saturating_mul(2);
    if cfg.request_timeout_secs > worst_case {
        return Ok(());
    }
    let mut err = ValidationError::new("request_timeout_too_short");
    err.message = Some(
        format!(
            "request_timeout_secs ({}) must exceed twice outbound_timeout_secs ({})",
            cfg.request_timeout_secs, cfg.outbound_timeout_secs
        )
        .into(),
    );
    Err(err)
}

/// Initializes tracing using the provided log level as the default filter
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("wellmind_api={},tower_http=debug", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .try_init();
    }
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults, plus `AI_BACKEND_URL` / `NEXT_PUBLIC_URL` if set
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{env}.toml)
/// 4. Environment variables (APP__*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    // Support both RUN_ENV and APP_ENV for selecting config profile
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    load_config_from(Path::new(CONFIG_DIR), &run_env)
}

/// Loads configuration from `config_dir`, using `run_env` to pick the
/// environment-specific file.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, AppConfigError> {
    let mut builder = Config::builder()
        .set_default("environment", run_env)?
        .set_default("notify_base_url", DEFAULT_NOTIFY_BASE_URL)?;

    if let Some(url) = env::var(LEGACY_AI_BACKEND_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
    {
        info!("Using {} for the prediction backend", LEGACY_AI_BACKEND_URL);
        builder = builder.set_default("ai_backend_url", url)?;
    }
    if let Some(url) = env::var(LEGACY_PUBLIC_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
    {
        builder = builder.set_default("notify_base_url", url)?;
    }

    let config = builder
        .add_source(File::from(config_dir.join("default")).required(false))
        .add_source(File::from(config_dir.join(run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}
