//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `YOBRAF_API_BASE_URL` - Backend API origin (e.g. <http://localhost:8000>)
//!
//! ## Optional
//! - `YOBRAF_REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 10)
//! - `YOBRAF_SHIPPING_FEE` - Flat shipping fee added to the cart total
//!   (default: 0, i.e. free shipping)

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Backend API origin, without a trailing path.
    pub api_base_url: Url,
    /// Timeout applied to every backend request.
    pub request_timeout: Duration,
    /// Flat shipping fee; `0.0` renders as free shipping.
    pub shipping_fee: f64,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_required_env("YOBRAF_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("YOBRAF_API_BASE_URL".to_string(), e.to_string())
            })?;

        let request_timeout_secs = match get_optional_env("YOBRAF_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("YOBRAF_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let shipping_fee = match get_optional_env("YOBRAF_SHIPPING_FEE") {
            Some(raw) => parse_shipping_fee(&raw)?,
            None => 0.0,
        };

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
            shipping_fee,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse the shipping fee, rejecting negative or non-finite values.
fn parse_shipping_fee(raw: &str) -> Result<f64, ConfigError> {
    let fee = raw.parse::<f64>().map_err(|e| {
        ConfigError::InvalidEnvVar("YOBRAF_SHIPPING_FEE".to_string(), e.to_string())
    })?;
    if !fee.is_finite() || fee < 0.0 {
        return Err(ConfigError::InvalidEnvVar(
            "YOBRAF_SHIPPING_FEE".to_string(),
            format!("must be a non-negative number (got {raw})"),
        ));
    }
    Ok(fee)
}
