use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::AppError;

use super::metrics::RequestMetrics;
use super::transport::{HttpTransport, ReqwestTransport};
use super::types::{RiotApiError, RiotApiResponse};

#[derive(Debug)]
pub struct RiotClient {
    transport: Arc<dyn HttpTransport>,
    /// Riot API Key
    key: String,
    account_base_url: String,
    platform_base_url: String,
    metrics: Arc<RequestMetrics>,
}

impl RiotClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(config.request_timeout)
            .map_err(|e| AppError::Config(format!("unable to build HTTP client: {e}")))?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            key: config.riot_api_key.clone(),
            account_base_url: config.account_base_url.clone(),
            platform_base_url: config.platform_base_url.clone(),
            metrics: RequestMetrics::new(),
        }
    }

    pub fn account_base_url(&self) -> &str {
        &self.account_base_url
    }

    pub fn platform_base_url(&self) -> &str {
        &self.platform_base_url
    }

    pub fn metrics(&self) -> &Arc<RequestMetrics> {
        &self.metrics
    }

    /// Perform an authenticated GET and classify the outcome.
    pub async fn request<T: DeserializeOwned>(&self, url: &str) -> RiotApiResponse<T> {
        if self.key.is_empty() {
            return Err(RiotApiError::MissingApiKey);
        }

        self.metrics.inc();
        tracing::trace!("[RIOT::CLIENT] GET {}", url);

        let headers = [
            ("X-Riot-Token", self.key.as_str()),
            ("Accept", "application/json"),
        ];
        let res = self
            .transport
            .get(url, &headers)
            .await
            .map_err(RiotApiError::RequestFailed)?;

        match res.status {
            StatusCode::TOO_MANY_REQUESTS => Err(RiotApiError::RateLimitExceeded {
                retry_after: res.retry_after.unwrap_or_else(|| "unknown".to_string()),
            }),
            StatusCode::UNAUTHORIZED => Err(RiotApiError::Unauthorized),
            StatusCode::NOT_FOUND => Err(RiotApiError::NotFound {
                url: url.to_string(),
            }),
            status if status.as_u16() >= 500 => Err(RiotApiError::ServerError(status)),
            status if status.is_success() => {
                serde_json::from_slice(&res.body).map_err(RiotApiError::InvalidResponse)
            }
            status => Err(RiotApiError::UnexpectedStatus(status)),
        }
    }
}
