//! A single history query.

use serde::{Deserialize, Serialize};

use crate::Package;

/// One (ticker, package, category) triple to query.
///
/// Combinations carry no identity beyond their fields; duplicates are
/// queried again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    ticker: String,
    package: Package,
    category: String,
}

impl Combination {
    /// Creates a new combination.
    #[must_use]
    pub fn new(ticker: impl Into<String>, package: Package, category: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            package,
            category: category.into(),
        }
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the data package.
    #[must_use]
    pub const fn package(&self) -> Package {
        self.package
    }

    /// Returns the category within the package.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.ticker, self.package, self.category)
    }
}
