use dotenv::dotenv;
use std::env;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::services::slot_parser::NO_RESULTS_SENTINEL;

pub const BASE_URL_VAR: &str = "SLOT_ASSISTANT_BASE_URL";
pub const TIMEOUT_VAR: &str = "SLOT_ASSISTANT_TIMEOUT_SECS";
pub const SENTINEL_VAR: &str = "SLOT_ASSISTANT_NO_RESULTS";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub no_results_sentinel: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            no_results_sentinel: NO_RESULTS_SENTINEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv().is_ok() {
            debug!("Loaded variables from .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_VAR) {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl {
                    name: BASE_URL_VAR,
                    value: url,
                });
            }
            config.base_url = url;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    name: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(sentinel) = lookup(SENTINEL_VAR) {
            let sentinel = sentinel.trim();
            if !sentinel.is_empty() {
                config.no_results_sentinel = sentinel.to_string();
            }
        }

        info!(
            "Using scheduling backend {} with {}s request timeout",
            config.base_url,
            config.request_timeout.as_secs()
        );

        Ok(config)
    }
}
