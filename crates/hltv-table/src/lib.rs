//! Tabular assembly for the hltv scraper.
//!
//! This crate flattens nested match records into tables with fixed schemas:
//!
//! - [`Cell`] / [`ColumnType`] - Nullable table values
//! - [`Schema`] - Ordered, typed columns known ahead of time
//! - [`Table`] - Rows of cells under a schema
//! - [`results_table`], [`matches_table`], [`economy_table`], [`rounds_table`] - Assembly

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assemble;
mod cell;
mod schema;
mod table;

pub use assemble::{economy_table, matches_table, results_table, rounds_table};
pub use cell::{Cell, ColumnType};
pub use schema::{Column, Schema, round_columns};
pub use table::{Table, TableError};
