//! Output format abstraction.

use hltv_table::Table;
use hltv_types::HltvError;
use std::io::Write;
use thiserror::Error;

use crate::{CsvFormatter, JsonFormatter};

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// Tab-separated values.
    Tsv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// Apache Parquet format.
    Parquet,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Parquet => "parquet",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Tsv, Self::Json, Self::Ndjson, Self::Parquet]
    }

    /// Returns true for formats that can be streamed to a terminal.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        !matches!(self, Self::Parquet)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "parquet" | "pq" => Ok(Self::Parquet),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Arrow/Parquet error.
    #[error("Parquet error: {0}")]
    Parquet(String),
}

impl From<FormatError> for HltvError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Io(e) => Self::Io(e),
            other => Self::Format(other.to_string()),
        }
    }
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a table, header or schema first, then every row in order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write + Send>(&self, table: &Table, writer: W) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

/// Writes `table` in `format` with that format's default settings.
///
/// # Errors
///
/// Returns an error if writing fails, or if Parquet is requested from a build
/// without the `parquet` feature.
pub fn write_table<W: Write + Send>(
    format: OutputFormat,
    table: &Table,
    writer: W,
) -> Result<(), FormatError> {
    match format {
        OutputFormat::Csv => CsvFormatter::new().write_table(table, writer),
        OutputFormat::Tsv => CsvFormatter::tsv().write_table(table, writer),
        OutputFormat::Json => JsonFormatter::new().write_table(table, writer),
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_table(table, writer),
        #[cfg(feature = "parquet")]
        OutputFormat::Parquet => crate::ParquetFormatter::new().write_table(table, writer),
        #[cfg(not(feature = "parquet"))]
        OutputFormat::Parquet => Err(FormatError::Parquet(
            "built without the parquet feature".to_string(),
        )),
    }
}
