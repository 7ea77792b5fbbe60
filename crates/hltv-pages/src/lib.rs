//! Page parsers for the hltv scraper.
//!
//! Every parser is synchronous and works on an already fetched document:
//!
//! - [`parse_results_page`] - One page of the results listing
//! - [`parse_match_page`] - Match overview with per-map side scores
//! - [`parse_economy_page`] - Round-by-round equipment values of one map
//! - [`parse_search_hits`] - JSON answer of the team, player and event search

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod economy;
mod error;
mod matches;
mod results;
mod search;
mod select;

pub use economy::parse_economy_page;
pub use error::{PageError, Result};
pub use matches::parse_match_page;
pub use results::parse_results_page;
pub use search::{SearchHit, parse_search_hits};
