//! Run configuration.

use chrono::NaiveDate;

use crate::{ConfigError, Selection};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GEXBOT_API_KEY";

/// Base URL of the GEXBot API.
pub const DEFAULT_BASE_URL: &str = "https://api.gex.bot";

/// Date format used on the command line and in history URLs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything a run needs, assembled once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// API credential sent as `Authorization: Basic <api_key>`.
    pub api_key: String,
    /// API base URL, without the `/v2/hist` path.
    pub base_url: String,
    /// Trading day to fetch history for.
    pub date: NaiveDate,
    /// Tickers and categories to query.
    pub selection: Selection,
}

impl Settings {
    /// Creates settings with the default endpoint, date and selection, and
    /// the credential read from [`API_KEY_ENV`].
    ///
    /// An unset variable leaves the credential empty; the runner refuses to
    /// start in that case.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Returns true if a non-blank credential is configured.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            date: default_date(),
            selection: Selection::default(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &if self.has_credential() { "<set>" } else { "<unset>" })
            .field("base_url", &self.base_url)
            .field("date", &self.date)
            .field("selection", &self.selection)
            .finish()
    }
}

/// Returns the default query date.
#[must_use]
pub fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 14).expect("valid date")
}

/// Parses a `YYYY-MM-DD` query date.
///
/// # Errors
///
/// Returns an error if the input is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        ConfigError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}
