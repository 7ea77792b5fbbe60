//! Scrape HLTV results, match statistics and round economy into tables.
//!
//! This is a facade crate that re-exports functionality from the hltv
//! workspace crates and adds the top-level operations:
//!
//! - [`get_results`] / [`get_match_ids`] - The results listing
//! - [`get_matches_stats`] - One row per played map
//! - [`get_matches_with_economy`] / [`get_rounds`] - Round economy
//! - [`get_match_stats_by_id`] / [`get_economy_by_match_id`] - A single match
//!
//! # Quick Start
//!
//! ```no_run
//! use hltv_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = HltvClient::with_defaults()?;
//!     let query = QueryBuilder::new()
//!         .start_date("2021-09-01")
//!         .end_date("2021-09-05")
//!         .team_names(["Natus Vincere"])
//!         .stars(1);
//!
//!     let table = get_matches_stats(&client, query, &FetchOptions::new().with_limit(20)).await?;
//!     println!("{} maps", table.len());
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod options;

pub use api::{
    get_economy_by_match_id, get_match_ids, get_match_records, get_match_stats_by_id,
    get_matches_stats, get_matches_with_economy, get_results, get_rounds,
};
pub use options::{FetchOptions, IntoQuery};

// Re-export core types
pub use hltv_types::*;

// Re-export query construction
pub use hltv_query::{DateInput, Directory, Query, QueryBuilder, QueryParams, SearchKind};

// Re-export the retrieval layer
pub use hltv_fetch::{
    CancellationToken, ClientConfig, FailurePolicy, FetchError, HltvClient, Pagination,
    RetryPolicy, SearchHit, url::SiteConfig,
};

// Re-export tables
pub use hltv_table::{Cell, Column, ColumnType, Schema, Table};

// Re-export formatters
#[cfg(feature = "format")]
pub use hltv_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, write_table,
};

#[cfg(all(feature = "format", feature = "parquet"))]
pub use hltv_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use hltv_lib::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        FetchOptions, IntoQuery, get_economy_by_match_id, get_match_ids, get_match_stats_by_id,
        get_matches_stats, get_matches_with_economy, get_results, get_rounds,
    };

    pub use hltv_types::{HltvError, MapName, MatchType, Result};

    pub use hltv_query::{Query, QueryBuilder};

    pub use hltv_fetch::{CancellationToken, ClientConfig, FailurePolicy, HltvClient, RetryPolicy};

    pub use hltv_table::{Cell, Table};

    #[cfg(feature = "format")]
    pub use hltv_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(all(feature = "format", feature = "parquet"))]
    pub use hltv_format::ParquetFormatter;
}
