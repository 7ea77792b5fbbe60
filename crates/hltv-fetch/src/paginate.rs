//! Offset-driven pagination shared by every listing operation.

use async_trait::async_trait;
use hltv_types::{HltvError, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Default number of records requested per page.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Where to start, how much to collect and how much to ask for at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Records to skip before collecting.
    pub skip: usize,
    /// Maximum number of records to collect; `None` collects everything.
    pub limit: Option<usize>,
    /// Records requested per page.
    pub batch_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Pagination {
    /// Sets the number of records to skip.
    #[must_use]
    pub const fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the maximum number of records.
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

/// What happens to already collected records when a later page fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Return what was collected so far and log the error.
    #[default]
    BestEffort,
    /// Propagate the error and drop what was collected.
    Strict,
}

/// A source of records addressable by offset.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Record type produced by the source.
    type Record: Send;

    /// Fetches at most `size` records starting at `skip`.
    ///
    /// An empty vector means the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched or parsed.
    async fn fetch_page(&self, skip: usize, size: usize) -> Result<Vec<Self::Record>>;
}

/// Collects records from `source` page by page.
///
/// Pages are requested with a strictly increasing offset that advances by the
/// number of records actually kept, so truncated pages neither skip nor repeat
/// records. A limit of zero returns immediately without any request.
///
/// `cancel` is checked before every page and also interrupts a page in flight.
///
/// # Errors
///
/// Returns [`HltvError::InvalidInput`] for a zero batch size. An error on the
/// first page always propagates; later errors follow `policy`.
pub async fn paginate<S>(
    source: &S,
    pagination: Pagination,
    policy: FailurePolicy,
    cancel: &CancellationToken,
) -> Result<Vec<S::Record>>
where
    S: PageSource + ?Sized,
{
    let Pagination {
        skip: mut cursor,
        limit,
        batch_size,
    } = pagination;

    if batch_size == 0 {
        return Err(HltvError::invalid_input(
            "batch_size",
            "got 0",
            "a positive number of records per page",
        ));
    }

    let mut collected = Vec::new();
    let mut pages = 0usize;

    while limit.is_none_or(|limit| collected.len() < limit) {
        let remaining = limit.map(|limit| limit - collected.len());
        let size = remaining.map_or(batch_size, |remaining| remaining.min(batch_size));

        let page = if cancel.is_cancelled() {
            Err(HltvError::Cancelled)
        } else {
            tokio::select! {
                biased;
                () = cancel.cancelled() => Err(HltvError::Cancelled),
                page = source.fetch_page(cursor, size) => page,
            }
        };

        let mut page = match page {
            Ok(page) => page,
            Err(err) => return settle(err, collected, policy),
        };
        pages += 1;

        if page.is_empty() {
            debug!(pages, cursor, "empty page, source exhausted");
            break;
        }
        if let Some(remaining) = remaining {
            page.truncate(remaining);
        }

        cursor += page.len();
        collected.extend(page);
        debug!(pages, cursor, collected = collected.len(), "page collected");
    }

    Ok(collected)
}

fn settle<T>(err: HltvError, collected: Vec<T>, policy: FailurePolicy) -> Result<Vec<T>> {
    if collected.is_empty() || policy == FailurePolicy::Strict {
        return Err(err);
    }
    warn!(error = %err, kept = collected.len(), "pagination stopped early, returning partial results");
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::default();
        assert_eq!(pagination.skip, 0);
        assert_eq!(pagination.limit, None);
        assert_eq!(pagination.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(FailurePolicy::default(), FailurePolicy::BestEffort);
    }

    #[test]
    fn test_settle() {
        assert!(settle(HltvError::Cancelled, Vec::<u8>::new(), FailurePolicy::BestEffort).is_err());
        assert!(settle(HltvError::Cancelled, vec![1u8], FailurePolicy::Strict).is_err());
        assert_eq!(
            settle(HltvError::Cancelled, vec![1u8], FailurePolicy::BestEffort).unwrap(),
            vec![1]
        );
    }
}
