//! Parser error types.

use hltv_types::HltvError;
use thiserror::Error;

/// Result type alias for page parsing.
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors raised when a document does not have the expected structure.
#[derive(Error, Debug)]
pub enum PageError {
    /// A required element was not found.
    #[error("Element not found: {context}")]
    MissingElement {
        /// Which element was looked up.
        context: &'static str,
    },

    /// An element was found but its content could not be interpreted.
    #[error("Invalid value for {context}: '{value}'")]
    InvalidValue {
        /// Which value was being read.
        context: &'static str,
        /// The offending raw text.
        value: String,
    },

    /// A CSS selector failed to compile.
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// A JSON document could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PageError {
    pub(crate) fn invalid(context: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            context,
            value: value.into(),
        }
    }
}

impl From<PageError> for HltvError {
    fn from(err: PageError) -> Self {
        Self::Parse(err.to_string())
    }
}
