//! Query and filter builder for the hltv scraper.
//!
//! - [`QueryBuilder`] - Collects raw filter criteria
//! - [`Query`] - Validated, immutable filter
//! - [`Directory`] - Name-to-identifier search used by [`Query::to_params`]
//! - [`QueryParams`] - Ordered wire parameters

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod directory;
mod params;
mod query;

pub use directory::{Directory, SearchKind, dedup_ids};
pub use params::{FLAG_VALUE, QueryParams, keys};
pub use query::{DateInput, Query, QueryBuilder};
