//! HTTP transport seam. [`ReqwestTransport`] is the production implementation; tests can substitute
//! any other [`Transport`].

use std::time::Duration;

use async_trait::async_trait;
use botkit_core::TransportError;
use reqwest::header::CONTENT_TYPE;

/// Status and body of a 2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal HTTP capability used by the client. Non-2xx responses and network failures are
/// reported as [`TransportError`], never as a successful [`HttpResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpResponse, TransportError>;
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// reqwest-backed transport. The underlying connection pool is released when this is dropped.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// `request_timeout` must exceed the long-poll timeout, or every idle poll fails.
    pub fn new(request_timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;
        if !(200..300).contains(&status) {
            return Err(TransportError::Status { status, body });
        }
        Ok(HttpResponse { status, body })
    }
}

/// URLs carry the bot token; strip them from error text.
fn network_error(e: reqwest::Error) -> TransportError {
    TransportError::Network(e.without_url().to_string())
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(network_error)?;
        Self::read(response).await
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send().await.map_err(network_error)?;
        Self::read(response).await
    }
}
