//! User selection of tickers and categories, and combination generation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{CategoryGroup, Combination, ConfigError};

/// The tickers and per-group categories selected for a run.
///
/// Every ticker is queried for every category of every group. In a
/// selection file each list may be omitted, in which case it is empty.
///
/// ```json
/// {
///   "tickers": ["SPX", "NDX"],
///   "state-gex": ["gex_full", "gex_zero"],
///   "orderflow": ["orderflow"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Selection {
    /// Tickers queried in every group.
    #[serde(default)]
    pub tickers: Vec<String>,
    /// Categories for [`CategoryGroup::StateGex`].
    #[serde(default)]
    pub state_gex: Vec<String>,
    /// Categories for [`CategoryGroup::StateGreeksZero`].
    #[serde(default)]
    pub state_greeks_zero: Vec<String>,
    /// Categories for [`CategoryGroup::StateGreeksOne`].
    #[serde(default)]
    pub state_greeks_one: Vec<String>,
    /// Categories for [`CategoryGroup::Classic`].
    #[serde(default)]
    pub classic: Vec<String>,
    /// Categories for [`CategoryGroup::Orderflow`].
    #[serde(default)]
    pub orderflow: Vec<String>,
}

impl Default for Selection {
    /// SPX full GEX state, the smallest useful query.
    fn default() -> Self {
        Self {
            tickers: vec!["SPX".to_string()],
            state_gex: vec!["gex_full".to_string()],
            state_greeks_zero: Vec::new(),
            state_greeks_one: Vec::new(),
            classic: Vec::new(),
            orderflow: Vec::new(),
        }
    }
}

impl Selection {
    /// Creates a selection with no tickers and no categories.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tickers: Vec::new(),
            state_gex: Vec::new(),
            state_greeks_zero: Vec::new(),
            state_greeks_one: Vec::new(),
            classic: Vec::new(),
            orderflow: Vec::new(),
        }
    }

    /// Parses a selection from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid selection document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a selection from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadSelection {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Returns the categories selected for a group.
    #[must_use]
    pub fn categories(&self, group: CategoryGroup) -> &[String] {
        match group {
            CategoryGroup::StateGex => &self.state_gex,
            CategoryGroup::StateGreeksZero => &self.state_greeks_zero,
            CategoryGroup::StateGreeksOne => &self.state_greeks_one,
            CategoryGroup::Classic => &self.classic,
            CategoryGroup::Orderflow => &self.orderflow,
        }
    }

    /// Replaces the categories selected for a group.
    pub fn set_categories(&mut self, group: CategoryGroup, categories: Vec<String>) {
        let slot = match group {
            CategoryGroup::StateGex => &mut self.state_gex,
            CategoryGroup::StateGreeksZero => &mut self.state_greeks_zero,
            CategoryGroup::StateGreeksOne => &mut self.state_greeks_one,
            CategoryGroup::Classic => &mut self.classic,
            CategoryGroup::Orderflow => &mut self.orderflow,
        };
        *slot = categories;
    }

    /// Generates every combination of this selection.
    ///
    /// Groups follow [`CategoryGroup::all`] order; within a group the order
    /// is ticker-major, category-minor. An empty selection yields an empty
    /// vector.
    #[must_use]
    pub fn combinations(&self) -> Vec<Combination> {
        let mut combinations = Vec::with_capacity(self.combination_count());

        for &group in CategoryGroup::all() {
            let package = group.package();
            for ticker in &self.tickers {
                for category in self.categories(group) {
                    combinations.push(Combination::new(ticker.as_str(), package, category.as_str()));
                }
            }
        }

        combinations
    }

    /// Returns the number of combinations [`Self::combinations`] produces.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        CategoryGroup::all()
            .iter()
            .map(|&group| self.tickers.len() * self.categories(group).len())
            .sum()
    }

    /// Returns true if the selection generates no combinations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combination_count() == 0
    }
}
