//! Core types for the hltv scraper.
//!
//! This crate provides the fundamental data structures used throughout the workspace:
//!
//! - [`HltvError`] - Error taxonomy shared by every crate
//! - [`MapName`], [`MatchType`], [`Stars`] - Validated filter values
//! - [`ResultRecord`], [`MatchRecord`], [`MapRecord`] - Parsed page records
//! - [`Economy`] - Round-by-round equipment values of a played map
//! - [`parse_date`] / [`format_date`] - Permissive date parsing and canonical formatting

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date;
mod economy;
mod error;
mod filter;
mod map;
mod record;

pub use date::{DATE_FORMAT, format_date, parse_date};
pub use economy::{Economy, ROUND_SLOTS, RoundEconomy, Winner};
pub use error::{HltvError, Result};
pub use filter::{MatchType, Stars};
pub use map::MapName;
pub use record::{MapRecord, MatchRecord, ResultRecord, StartingSide, TeamRef};
