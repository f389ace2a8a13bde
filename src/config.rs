use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::geoapify::GeoapifyConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub geoapify_api_key: String,
    pub geoapify_base_url: String,
    pub geoapify_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl AppConfig {
    /// Reads `.env` (when present) and then the process environment.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let geoapify_api_key = lookup("GEOAPIFY_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("GEOAPIFY_API_KEY must be set")?;
        let geoapify_base_url = lookup("GEOAPIFY_BASE_URL")
            .unwrap_or_else(|| "https://api.geoapify.com".to_string());
        let geoapify_timeout_secs = lookup("GEOAPIFY_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .unwrap_or(10);

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .unwrap_or(8000);

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            geoapify_api_key,
            geoapify_base_url,
            geoapify_timeout_secs,
            host,
            port,
            log_level,
        })
    }

    pub fn geoapify(&self) -> GeoapifyConfig {
        GeoapifyConfig {
            base_url: self.geoapify_base_url.clone(),
            api_key: self.geoapify_api_key.clone(),
            timeout_secs: self.geoapify_timeout_secs,
        }
    }
}
