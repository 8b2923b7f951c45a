use std::env;
use std::time::Duration;

use crate::error::AppError;
use crate::riot::region::{Platform, Region};

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    /// Base URL serving Account-v1, without trailing slash.
    pub account_base_url: String,
    /// Base URL serving Summoner-v4, without trailing slash.
    pub platform_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub const DEFAULT_PLATFORM: Platform = Platform::SG2;
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Read the process environment. Loading `.env` is left to the caller.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let riot_api_key = var("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let platform = match var("RIOT_PLATFORM") {
            Some(v) => v.parse::<Platform>()?,
            None => Self::DEFAULT_PLATFORM,
        };

        let region = match var("RIOT_REGION") {
            Some(v) => v.parse::<Region>()?,
            None => platform.account_region(),
        };

        let account_base_url = var("RIOT_ACCOUNT_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| region.base_url());

        let platform_base_url = var("RIOT_PLATFORM_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| platform.base_url());

        let request_timeout_secs = var("RIOT_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(Self::DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self {
            riot_api_key,
            account_base_url,
            platform_base_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    /// Configuration pointing both endpoints at the same host, mostly useful against mock servers.
    pub fn with_base_url(riot_api_key: impl Into<String>, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            riot_api_key: riot_api_key.into(),
            account_base_url: base_url.clone(),
            platform_base_url: base_url,
            request_timeout: Duration::from_secs(Self::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
