//! HTTP client with retries, request spacing and typed page accessors.

use hltv_pages::{parse_economy_page, parse_match_page, parse_results_page};
use hltv_query::QueryParams;
use hltv_types::{Economy, HltvError, MatchRecord, ResultRecord};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard, Semaphore};
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use crate::retry::RetryPolicy;
use crate::transport::{ReqwestTransport, Transport};
use crate::url::SiteConfig;

/// Configuration for the site client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site endpoints.
    pub site: SiteConfig,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Retry schedule for failed requests.
    pub retry: RetryPolicy,
    /// Minimum time between the completion of one request and the start of
    /// the next.
    pub min_spacing: Duration,
    /// Maximum concurrent match and economy page fetches, shared by clones.
    pub concurrency: usize,
    /// Proxy URLs, rotated after each failed attempt. Empty means direct.
    pub proxies: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!(
                "Mozilla/5.0 (X11; Linux x86_64) hltvscrape/{}",
                env!("CARGO_PKG_VERSION")
            ),
            retry: RetryPolicy::default(),
            min_spacing: Duration::from_secs(1),
            concurrency: 4,
            proxies: Vec::new(),
        }
    }
}

/// Errors raised by the client itself.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The underlying HTTP library failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No response was received, for a reason other than the HTTP library.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Every attempt failed.
    #[error("Request to {url} failed after {attempts} attempt(s)")]
    RequestFailure {
        /// The requested URL.
        url: String,
        /// Number of attempts made.
        attempts: u32,
        /// Status of the last response received, if any.
        status: Option<u16>,
        /// Body of the last response received, if any.
        body: Option<String>,
    },
}

impl FetchError {
    /// Returns true if repeating the request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => !e.is_builder(),
            Self::Transport(_) => true,
            Self::RequestFailure { .. } => false,
        }
    }
}

impl From<FetchError> for HltvError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::RequestFailure {
                url,
                attempts,
                status,
                body,
            } => Self::RequestFailure {
                url,
                attempts,
                status,
                body,
            },
            other => Self::Http(other.to_string()),
        }
    }
}

/// Client for the site.
///
/// Clones share the transport, the request spacing and the detail page
/// permits, so a clone handed to a concurrent task still respects the limits
/// of its origin. Independent operations should use independent clients.
#[derive(Debug, Clone)]
pub struct HltvClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
    last_request: Arc<Mutex<Option<Instant>>>,
    detail_permits: Arc<Semaphore>,
}

impl HltvClient {
    /// Creates a client that talks to the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let detail_permits = Arc::new(Semaphore::new(config.concurrency.max(1)));
        Self {
            transport,
            config: Arc::new(config),
            last_request: Arc::new(Mutex::new(None)),
            detail_permits,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches a document, retrying according to the configured policy.
    ///
    /// Any non-success status and any transport error is retried with the same
    /// request. A `Retry-After` hint is added on top of the backoff delay.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::RequestFailure`] carrying the last status and body
    /// once every attempt failed, or the transport error if it is not retryable.
    #[instrument(level = "debug", skip(self, params), fields(params = params.len()))]
    pub async fn fetch(&self, url: &str, params: &[(String, String)]) -> Result<String, FetchError> {
        let policy = self.config.retry;
        let mut last_status = None;
        let mut last_body = None;
        let mut attempt = 0;

        loop {
            attempt += 1;
            let outcome = {
                let mut slot = self.reserve_slot().await;
                let outcome = self.transport.get(url, params).await;
                if let Some(last) = slot.as_deref_mut() {
                    *last = Some(Instant::now());
                }
                outcome
            };

            let retry_after = match outcome {
                Ok(response) if response.is_success() => {
                    debug!(status = response.status, attempt, bytes = response.body.len(), "fetched");
                    return Ok(response.body);
                }
                Ok(response) => {
                    warn!(status = response.status, attempt, "unsuccessful response");
                    last_status = Some(response.status);
                    last_body = Some(response.body);
                    response.retry_after
                }
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, attempt, "request failed");
                    None
                }
                Err(e) => return Err(e),
            };

            if attempt >= policy.max_attempts() {
                return Err(FetchError::RequestFailure {
                    url: url.to_string(),
                    attempts: attempt,
                    status: last_status,
                    body: last_body,
                });
            }

            self.transport.rotate();
            let delay = policy.delay_for_attempt(attempt) + retry_after.unwrap_or_default();
            tokio::time::sleep(delay).await;
        }
    }

    /// Waits until the minimum spacing since the previous request completed has
    /// elapsed.
    ///
    /// The returned guard holds the slot while the request is in flight; the
    /// caller stamps the completion time into it. `None` when spacing is off.
    async fn reserve_slot(&self) -> Option<MutexGuard<'_, Option<Instant>>> {
        if self.config.min_spacing.is_zero() {
            return None;
        }
        let last = self.last_request.lock().await;
        if let Some(previous) = *last {
            tokio::time::sleep_until(previous + self.config.min_spacing).await;
        }
        Some(last)
    }

    /// Fetches a match or economy page under one of the shared detail permits.
    async fn fetch_detail(&self, url: &str) -> hltv_types::Result<String> {
        let _permit = self
            .detail_permits
            .acquire()
            .await
            .map_err(|_| HltvError::Cancelled)?;
        Ok(self.fetch(url, &[]).await?)
    }

    /// Fetches and parses one page of the results listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn fetch_results(&self, params: &QueryParams) -> hltv_types::Result<Vec<ResultRecord>> {
        let body = self.fetch(&self.config.site.results_url(), params.pairs()).await?;
        Ok(parse_results_page(&body)?)
    }

    /// Fetches and parses a match overview page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn fetch_match(&self, match_id: u64) -> hltv_types::Result<MatchRecord> {
        let body = self.fetch_detail(&self.config.site.match_url(match_id)).await?;
        Ok(parse_match_page(&body)?)
    }

    /// Fetches and parses the economy page of one played map.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be parsed.
    pub async fn fetch_economy(&self, map_stats_id: u64) -> hltv_types::Result<Economy> {
        let body = self
            .fetch_detail(&self.config.site.economy_url(map_stats_id))
            .await?;
        Ok(parse_economy_page(&body)?)
    }
}
