use std::time::Duration;

use crate::services::meal_suggestion::DEFAULT_MEAL_API_URL;

/// Server configuration
///
/// # Environment
///
/// Every value can be overridden through the environment (a `.env` file is
/// read first):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8080 | HTTP listen port |
/// | ENVIRONMENT | development | development / production |
/// | LOG_LEVEL | info | max tracing level |
/// | LOG_DIR | - | daily rolling log file directory |
/// | CATALOG_PATH | - | JSON table catalog, built-in floor plan otherwise |
/// | MEAL_API_URL | TheMealDB random endpoint | meal suggestion endpoint |
/// | MEAL_API_TIMEOUT_MS | 2000 | meal suggestion timeout (ms) |
/// | MEAL_API_ENABLED | true | false serves the fixed house suggestion |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | graceful shutdown budget (ms) |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=9000 MEAL_API_ENABLED=false cargo run -p seating-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Table catalog file; `None` uses the built-in floor plan
    pub catalog_path: Option<String>,
    pub meal_api_url: String,
    pub meal_api_timeout_ms: u64,
    pub meal_api_enabled: bool,
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            catalog_path: std::env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),
            meal_api_url: std::env::var("MEAL_API_URL")
                .unwrap_or_else(|_| DEFAULT_MEAL_API_URL.into()),
            meal_api_timeout_ms: std::env::var("MEAL_API_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            meal_api_enabled: std::env::var("MEAL_API_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// Offline configuration on the given port
    ///
    /// Built-in catalog, meal service disabled. Used by tests.
    pub fn offline(http_port: u16) -> Self {
        Self {
            http_port,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            catalog_path: None,
            meal_api_url: DEFAULT_MEAL_API_URL.into(),
            meal_api_timeout_ms: 2000,
            meal_api_enabled: false,
            shutdown_timeout_ms: 10000,
        }
    }

    pub fn meal_api_timeout(&self) -> Duration {
        Duration::from_millis(self.meal_api_timeout_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
