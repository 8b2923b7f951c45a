use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{StatusCode, header::RETRY_AFTER};

use super::types::BoxError;

/// Raw outcome of a GET, before any Riot specific interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub retry_after: Option<String>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            retry_after: None,
            body: body.into(),
        }
    }

    pub fn with_retry_after(mut self, retry_after: impl Into<String>) -> Self {
        self.retry_after = Some(retry_after.into());
        self
    }
}

/// Trait implemented by structures capable of performing raw HTTP requests to the riot API.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, BoxError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, BoxError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let res = request.send().await?;
        let status = res.status();
        let retry_after = res
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = res.bytes().await?;

        Ok(HttpResponse {
            status,
            retry_after,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_propagates_reqwest_error() {
        let transport = ReqwestTransport::new(Duration::from_secs(1)).unwrap();

        let res = transport.get("ht!tp://invalid-url", &[]).await; // incorrect schema

        assert!(res.is_err());
    }
}
