//! HTTP client and pagination for the hltv scraper.
//!
//! This crate provides the retrieval pipeline:
//!
//! - [`url::SiteConfig`] - Site endpoints and URL construction
//! - [`HltvClient`] - Client with retries, request spacing and proxy rotation
//! - [`Transport`] - The raw GET seam, backed by [`ReqwestTransport`]
//! - [`paginate`] - Offset-driven page collection with limits and cancellation
//! - [`ResultsSource`] / [`MatchStatsSource`] - Listing and detail page sources
//! - [`fetch_match_details`] - Bounded concurrent match page fan-out

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod paginate;
mod retry;
mod search;
mod sources;
mod stream;
mod transport;
pub mod url;

pub use client::{ClientConfig, FetchError, HltvClient};
pub use paginate::{DEFAULT_BATCH_SIZE, FailurePolicy, PageSource, Pagination, paginate};
pub use retry::RetryPolicy;
pub use sources::{MatchStatsSource, ResultsSource};
pub use stream::{attach_economy, fetch_match_details};
pub use tokio_util::sync::CancellationToken;
pub use hltv_pages::SearchHit;
pub use transport::{RawResponse, ReqwestTransport, Transport};
