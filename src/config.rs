//! Configuration module

use std::env;
use std::time::Duration;

/// Default prediction backend
pub const DEFAULT_PREDICTION_API_URL: &str = "https://road-safety-app.onrender.com";

/// Default `Origin` header sent upstream
pub const DEFAULT_RELAY_ORIGIN: &str = "https://road-safety-app.vercel.app";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Prediction backend base URL (without the `/predict` path)
    pub prediction_api_url: String,

    /// Origin identifier sent with every upstream call
    pub relay_origin: String,

    /// Upstream timeout in seconds, 0 disables the timeout
    pub upstream_timeout_secs: u64,

    /// Reject requests outside the option domains before forwarding
    pub validate_requests: bool,

    /// Environment (development, production)
    pub environment: String,

    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            prediction_api_url: DEFAULT_PREDICTION_API_URL.to_string(),
            relay_origin: DEFAULT_RELAY_ORIGIN.to_string(),
            upstream_timeout_secs: 30,
            validate_requests: true,
            environment: "development".to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            prediction_api_url: env::var("PREDICTION_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.prediction_api_url),

            relay_origin: env::var("RELAY_ORIGIN")
                .unwrap_or(defaults.relay_origin),

            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.upstream_timeout_secs),

            validate_requests: env::var("VALIDATE_REQUESTS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.validate_requests),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),

            json_logs: env::var("LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Relay settings derived from this configuration
    pub fn relay(&self) -> RelayConfig {
        RelayConfig {
            base_url: self.prediction_api_url.clone(),
            origin: self.relay_origin.clone(),
            timeout: match self.upstream_timeout_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            validate_requests: self.validate_requests,
        }
    }
}

/// Settings injected into the prediction relay
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub base_url: String,
    pub origin: String,
    pub timeout: Option<Duration>,
    pub validate_requests: bool,
}

impl RelayConfig {
    /// Full URL of the upstream predict endpoint
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Config::default().relay()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
