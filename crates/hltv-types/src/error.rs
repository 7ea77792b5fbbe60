//! Error types for the hltv scraper.

use thiserror::Error;

/// Result type alias for hltv operations.
pub type Result<T> = std::result::Result<T, HltvError>;

/// Errors that can occur while building queries, fetching pages and assembling tables.
#[derive(Error, Debug)]
pub enum HltvError {
    /// A caller-supplied value failed local validation.
    ///
    /// Raised synchronously while building a query; never retried.
    #[error("Invalid {field}: {message} (expected {expected})")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// What was wrong with the value.
        message: String,
        /// The constraint the value must satisfy.
        expected: String,
    },

    /// Every attempt to fetch a page failed.
    #[error("Request to {url} failed after {attempts} attempt(s) (last status: {})", display_status(.status))]
    RequestFailure {
        /// The requested URL, without query parameters.
        url: String,
        /// Number of attempts made.
        attempts: u32,
        /// Status code of the last response, if any response was received.
        status: Option<u16>,
        /// Body of the last response, if any response was received.
        body: Option<String>,
    },

    /// Transport-level failure that is not tied to a response.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A fetched page did not have the expected structure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// The operation was cancelled by the caller.
    #[error("Operation cancelled")]
    Cancelled,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HltvError {
    /// Creates an [`HltvError::InvalidInput`].
    pub fn invalid_input(
        field: &'static str,
        message: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
            expected: expected.into(),
        }
    }

    /// Returns true if this error came from local validation.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns true if this error signals that the caller cancelled the operation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the status code of the last response for request failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailure { status, .. } => *status,
            _ => None,
        }
    }
}

fn display_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "none".to_string(), |s| s.to_string())
}
