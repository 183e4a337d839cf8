use std::path::PathBuf;

use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::anime::error::{FetchError, FetchResult};

/// Status line and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and hands back the raw response.
///
/// Implementations must not retry or cache; the caller owns that policy.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> FetchResult<TransportResponse>;

    /// Name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Live transport over reqwest.
#[derive(Clone, Default)]
pub struct HttpTransport {
    http_client: HttpClient,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> FetchResult<TransportResponse> {
        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Serves a recorded response file as if it came back with `200 OK`.
#[derive(Debug, Clone)]
pub struct FixtureTransport {
    path: PathBuf,
}

impl FixtureTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl Transport for FixtureTransport {
    async fn post_json(&self, _url: &str, _body: &Value) -> FetchResult<TransportResponse> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| FetchError::Transport {
            status: None,
            reason: format!("failed to read fixture {}: {e}", self.path.display()),
        })?;
        Ok(TransportResponse { status: 200, body })
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
