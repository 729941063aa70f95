//! HTTP client and request runner for the gexhist history URL fetcher.
//!
//! This crate provides the query pipeline:
//!
//! - [`url::history_url`] - Constructs history endpoint URLs
//! - [`HistoryClient`] - HTTP client carrying the credential headers
//! - [`QueryOutcome`] - Classified result of a single request
//! - [`write_report`] - Console rendering of a finished query
//! - [`Runner`] - Queries a combination list and reports each result

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/gexhist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod outcome;
mod report;
mod runner;
pub mod url;

pub use client::{ClientConfig, ClientError, HistoryClient};
pub use outcome::QueryOutcome;
pub use report::{QueryReport, separator, write_report};
pub use runner::{RunError, RunSummary, Runner};
