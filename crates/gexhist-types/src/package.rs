//! Data packages and the category groups selected within them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// GEXBot data package, the second path segment of a history URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Package {
    /// Per-strike state snapshots (GEX and greeks).
    State,
    /// Classic GEX profile.
    Classic,
    /// Order flow metrics.
    Orderflow,
}

impl Package {
    /// Returns the package as a URL path segment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Classic => "classic",
            Self::Orderflow => "orderflow",
        }
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A selection group: a list of categories queried under one package.
///
/// The `state` package is split into three groups (GEX, zero-DTE greeks and
/// one-DTE greeks) so each can be toggled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryGroup {
    /// `state` package, `gex_*` categories.
    StateGex,
    /// `state` package, `*_zero` greek categories.
    StateGreeksZero,
    /// `state` package, `*_one` greek categories.
    StateGreeksOne,
    /// `classic` package.
    Classic,
    /// `orderflow` package.
    Orderflow,
}

impl CategoryGroup {
    /// Returns all groups in generation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::StateGex,
            Self::StateGreeksZero,
            Self::StateGreeksOne,
            Self::Classic,
            Self::Orderflow,
        ]
    }

    /// Returns the package this group is queried under.
    #[must_use]
    pub const fn package(&self) -> Package {
        match self {
            Self::StateGex | Self::StateGreeksZero | Self::StateGreeksOne => Package::State,
            Self::Classic => Package::Classic,
            Self::Orderflow => Package::Orderflow,
        }
    }

    /// Returns the group identifier used on the command line and in
    /// selection files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StateGex => "state-gex",
            Self::StateGreeksZero => "state-greeks-zero",
            Self::StateGreeksOne => "state-greeks-one",
            Self::Classic => "classic",
            Self::Orderflow => "orderflow",
        }
    }

    /// Returns the categories the API publishes for this group.
    #[must_use]
    pub const fn known_categories(&self) -> &'static [&'static str] {
        match self {
            Self::StateGex => &["gex_full", "gex_zero", "gex_one"],
            Self::StateGreeksZero => &["delta_zero", "gamma_zero", "vanna_zero", "charm_zero"],
            Self::StateGreeksOne => &["delta_one", "gamma_one", "vanna_one", "charm_one"],
            Self::Classic => &["gex_full"],
            Self::Orderflow => &["orderflow"],
        }
    }
}

impl std::fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryGroup {
    type Err = CategoryGroupParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "state-gex" => Ok(Self::StateGex),
            "state-greeks-zero" => Ok(Self::StateGreeksZero),
            "state-greeks-one" => Ok(Self::StateGreeksOne),
            "classic" => Ok(Self::Classic),
            "orderflow" => Ok(Self::Orderflow),
            _ => Err(CategoryGroupParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown category group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroupParseError(String);

impl std::fmt::Display for CategoryGroupParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid category group '{}', expected one of: state-gex, state-greeks-zero, state-greeks-one, classic, orderflow",
            self.0
        )
    }
}

impl std::error::Error for CategoryGroupParseError {}
