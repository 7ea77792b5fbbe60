//! The raw GET seam between the client and the network.

use async_trait::async_trait;
use reqwest::{Client, Proxy, header::RETRY_AFTER};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

use crate::client::{ClientConfig, FetchError};

/// A received response, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
    /// Wait mandated by a `Retry-After` header, in whole seconds.
    pub retry_after: Option<Duration>,
}

impl RawResponse {
    /// Creates a response without a retry hint.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            retry_after: None,
        }
    }

    /// Creates a `200 OK` response.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Sets the retry hint.
    #[must_use]
    pub const fn with_retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = Some(retry_after);
        self
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs single GET requests without any retry logic.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Sends one GET request with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was received at all.
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse, FetchError>;

    /// Switches to the next outbound route after a failed attempt.
    fn rotate(&self) {}
}

/// [`Transport`] backed by `reqwest`, with one connection pool per proxy.
#[derive(Debug)]
pub struct ReqwestTransport {
    clients: Vec<Client>,
    current: AtomicUsize,
}

impl ReqwestTransport {
    /// Builds the underlying HTTP clients.
    ///
    /// # Errors
    ///
    /// Returns an error if a proxy URL is invalid or a client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let clients = if config.proxies.is_empty() {
            vec![Self::builder(config).build()?]
        } else {
            config
                .proxies
                .iter()
                .map(|proxy| Ok(Self::builder(config).proxy(Proxy::all(proxy)?).build()?))
                .collect::<Result<Vec<_>, FetchError>>()?
        };
        Ok(Self {
            clients,
            current: AtomicUsize::new(0),
        })
    }

    fn builder(config: &ClientConfig) -> reqwest::ClientBuilder {
        Client::builder()
            .pool_max_idle_per_host(config.concurrency)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true)
    }

    fn client(&self) -> &Client {
        let index = self.current.load(Ordering::Relaxed) % self.clients.len();
        &self.clients[index]
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse, FetchError> {
        let response = self.client().get(url).query(params).send().await?;
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response.text().await?;
        Ok(RawResponse {
            status,
            body,
            retry_after,
        })
    }

    fn rotate(&self) {
        if self.clients.len() > 1 {
            let next = self.current.fetch_add(1, Ordering::Relaxed) + 1;
            debug!(route = next % self.clients.len(), "rotated proxy");
        }
    }
}
