//! Where the generation service lives and how to authenticate against it.
//!
//! Values come from `FLASHDECK_API_URL` and `FLASHDECK_API_KEY`. Native builds
//! read the process environment first; every build falls back to the values
//! baked in at compile time, which is the only source available on wasm.

use tracing::{info, warn};

use crate::error::ConfigError;

pub const ENDPOINT_VAR: &str = "FLASHDECK_API_URL";
pub const API_KEY_VAR: &str = "FLASHDECK_API_KEY";

const BUILT_ENDPOINT: Option<&str> = option_env!("FLASHDECK_API_URL");
const BUILT_API_KEY: Option<&str> = option_env!("FLASHDECK_API_KEY");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl ServiceConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into().trim().to_string();
        if endpoint.is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }

        Ok(Self {
            endpoint,
            api_key: api_key.into().trim().to_string(),
        })
    }

    /// Resolve the service address and key from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let endpoint = var(ENDPOINT_VAR, BUILT_ENDPOINT).ok_or(ConfigError::MissingEndpoint)?;
        let api_key = var(API_KEY_VAR, BUILT_API_KEY).unwrap_or_else(|| {
            warn!("{API_KEY_VAR} not set, requests will carry an empty x-api-key");
            String::new()
        });

        let config = Self::new(endpoint, api_key)?;
        info!(endpoint = %config.endpoint, "generation service configured");
        Ok(config)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn var(key: &str, built: Option<&str>) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| built.map(str::to_string))
}

#[cfg(target_arch = "wasm32")]
fn var(_key: &str, built: Option<&str>) -> Option<String> {
    built.map(str::to_string)
}
