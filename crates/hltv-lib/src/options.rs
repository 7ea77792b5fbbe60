//! Per-call options shared by the listing operations.

use hltv_fetch::{CancellationToken, DEFAULT_BATCH_SIZE, FailurePolicy, Pagination};
use hltv_query::{Query, QueryBuilder};
use hltv_types::Result;

/// Pagination, failure policy and cancellation for one operation.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Listing entries to skip before collecting.
    pub skip: usize,
    /// Maximum number of matches to collect; `None` collects everything.
    pub limit: Option<usize>,
    /// Matches requested per page.
    pub batch_size: usize,
    /// What to do with collected records when a later page fails.
    pub policy: FailurePolicy,
    /// Cancels the operation between pages and before detail fetches.
    pub cancel: CancellationToken,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: None,
            batch_size: DEFAULT_BATCH_SIZE,
            policy: FailurePolicy::default(),
            cancel: CancellationToken::new(),
        }
    }
}

impl FetchOptions {
    /// Creates options that collect everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of listing entries to skip.
    #[must_use]
    pub const fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Caps the number of matches collected.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Uses `cancel` instead of a private token.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns the pagination window.
    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        Pagination {
            skip: self.skip,
            limit: self.limit,
            batch_size: self.batch_size,
        }
    }
}

/// Anything that can become a validated [`Query`].
///
/// Lets operations take either a prebuilt query or the raw criteria of a
/// [`QueryBuilder`], which is validated before any request is made.
pub trait IntoQuery {
    /// Converts into a validated query.
    ///
    /// # Errors
    ///
    /// Returns [`hltv_types::HltvError::InvalidInput`] if validation fails.
    fn into_query(self) -> Result<Query>;
}

impl IntoQuery for Query {
    fn into_query(self) -> Result<Query> {
        Ok(self)
    }
}

impl IntoQuery for &Query {
    fn into_query(self) -> Result<Query> {
        Ok(self.clone())
    }
}

impl IntoQuery for QueryBuilder {
    fn into_query(self) -> Result<Query> {
        self.build()
    }
}
