//! Network boundary between the aggregator and the dictionary service.
//!
//! The transport only moves bytes: it reports the status code and body of a
//! GET and surfaces connection-level failures. Interpreting the body is the
//! client's job, so the trait can be replaced by a recording mock in tests.

use crate::aggregator::client::ClientError;
use async_trait::async_trait;
use std::time::Duration;

/// Status and raw body of a dictionary service response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// False for an empty body or a JSON `null`
    pub fn has_body(&self) -> bool {
        let body = self.body.trim();
        !body.is_empty() && body != "null"
    }
}

/// Transport trait for GET requests against the dictionary service.
///
/// Implementations return `Err` only for transport failures (connection
/// refused, timeout, broken body stream). Any HTTP status is a successful
/// transport result.
#[async_trait]
pub trait DictionaryTransport: Send + Sync {
    /// Issue a GET for `url`
    async fn get(&self, url: &str) -> Result<RemoteResponse, ClientError>;
}

/// Production transport backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport, optionally with a per-request timeout
    pub fn new(timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DictionaryTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RemoteResponse, ClientError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            ClientError::Transport(format!("Reading body of GET {} failed: {}", url, e))
        })?;

        Ok(RemoteResponse { status, body })
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;
