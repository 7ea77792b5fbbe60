//! Table writers for the hltv scraper.
//!
//! This crate writes assembled [`hltv_table::Table`]s to files or streams:
//!
//! - [`CsvFormatter`] - CSV or TSV, nulls as empty fields
//! - [`JsonFormatter`] - JSON array or NDJSON of column-keyed objects
//! - [`ParquetFormatter`] - Apache Parquet columnar format with nullable columns

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

#[cfg(feature = "parquet")]
mod parquet;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat, write_table};
pub use json::{JsonFormatter, JsonStyle};

#[cfg(feature = "parquet")]
pub use crate::parquet::ParquetFormatter;
