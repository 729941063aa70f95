//! Core types for the gexhist history URL fetcher.
//!
//! This crate provides the configuration side of a run:
//!
//! - [`Package`] and [`CategoryGroup`] - The API's data packages and the five selection groups
//! - [`Combination`] - A single (ticker, package, category) query
//! - [`Selection`] - Selected tickers and categories, and combination generation
//! - [`Settings`] - Credential, endpoint, date and selection for a run
//! - [`ConfigError`] - Fatal configuration errors

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/gexhist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod combination;
mod error;
mod package;
mod selection;
mod settings;

pub use catalog::{KNOWN_TICKERS, is_known_ticker};
pub use combination::Combination;
pub use error::{ConfigError, Result};
pub use package::{CategoryGroup, CategoryGroupParseError, Package};
pub use selection::Selection;
pub use settings::{
    API_KEY_ENV, DATE_FORMAT, DEFAULT_BASE_URL, Settings, default_date, parse_date,
};
