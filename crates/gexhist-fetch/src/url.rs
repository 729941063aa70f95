//! GEXBot history URL construction.

use chrono::NaiveDate;
use gexhist_types::{Combination, DATE_FORMAT};

/// Path prefix of the history endpoint.
pub const HISTORY_PATH: &str = "/v2/hist";

/// Query flag asking the API for a JSON body holding the signed URL
/// instead of a redirect to it.
pub const NOREDIRECT: &str = "noredirect";

/// Builds the history URL for one combination.
///
/// URL format: `{base_url}/v2/hist/{TICKER}/{PACKAGE}/{CATEGORY}/{YYYY-MM-DD}`
///
/// Path segments are used as given; no case folding or escaping is applied.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use gexhist_fetch::url::history_url;
/// use gexhist_types::{Combination, Package};
///
/// let combo = Combination::new("SPX", Package::State, "gex_full");
/// let date = NaiveDate::from_ymd_opt(2025, 11, 14).unwrap();
/// let url = history_url("https://api.gex.bot", &combo, date);
/// assert_eq!(url, "https://api.gex.bot/v2/hist/SPX/state/gex_full/2025-11-14");
/// ```
#[must_use]
pub fn history_url(base_url: &str, combination: &Combination, date: NaiveDate) -> String {
    format!(
        "{}{}/{}/{}/{}/{}",
        base_url.trim_end_matches('/'),
        HISTORY_PATH,
        combination.ticker(),
        combination.package(),
        combination.category(),
        date.format(DATE_FORMAT)
    )
}

/// Appends the [`NOREDIRECT`] flag to a history URL.
#[must_use]
pub fn request_url(history_url: &str) -> String {
    format!("{history_url}?{NOREDIRECT}")
}
