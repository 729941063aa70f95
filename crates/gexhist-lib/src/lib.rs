//! Rust library for querying GEXBot historical data URLs.
//!
//! This is a facade crate that re-exports functionality from the gexhist
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use gexhist_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_env();
//!     let combinations = settings.selection.combinations();
//!
//!     let summary = Runner::from_settings(&settings)
//!         .run(&combinations, &mut std::io::stdout())
//!         .await?;
//!     println!("{summary}");
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/gexhist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use gexhist_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use gexhist_fetch::{
    ClientConfig, ClientError, HistoryClient, QueryOutcome, QueryReport, RunError, RunSummary,
    Runner, separator, url, write_report,
};

/// Prelude module for convenient imports.
///
/// ```
/// use gexhist_lib::prelude::*;
/// ```
pub mod prelude {
    pub use gexhist_types::{
        API_KEY_ENV, CategoryGroup, Combination, ConfigError, KNOWN_TICKERS, Package, Selection,
        Settings,
    };

    #[cfg(feature = "fetch")]
    pub use gexhist_fetch::{ClientConfig, QueryOutcome, RunError, RunSummary, Runner};
}
