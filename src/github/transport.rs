use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use url::Url;

use crate::error::Result;
use crate::github::rate_limit::RateLimitStatus;

const USER_AGENT: &str = concat!("github-explorer/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: String,
    pub rate_limit: Option<RateLimitStatus>,
}

impl HttpReply {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            rate_limit: None,
        }
    }
}

/// Issues GET requests against the upstream API.
///
/// `Err` is reserved for transport failures. Any HTTP status, including
/// 4xx and 5xx, comes back as an `HttpReply`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpReply>;
}

/// Unauthenticated reqwest transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<HttpReply> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let rate_limit = RateLimitStatus::from_headers(response.headers());
        let body = response.text().await?;

        Ok(HttpReply {
            status,
            body,
            rate_limit,
        })
    }
}
