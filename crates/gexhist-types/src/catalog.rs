//! Tickers published by the history API.

/// Tickers with history available, in the API's listing order.
///
/// The list is informational; selections are not checked against it.
pub const KNOWN_TICKERS: &[&str] = &[
    "SPX", "ES_SPX", "NDX", "NQ_NDX", "RUT", "SPY", "QQQ", "TQQQ", "UVXY", "AAPL", "TSLA", "MSFT",
    "AMZN", "NVDA", "META", "NFLX", "AVGO", "MSTR", "VIX", "GOOG", "IWM", "TLT", "GLD", "USO",
    "GOOGL", "AMD", "SMCI", "COIN", "PLTR", "APP", "BABA", "SNOW", "IONQ", "HOOD", "CRWD", "MU",
    "CRWV", "INTC", "UNH", "VALE", "IBIT", "SLV", "HYG", "SOFI", "GME", "TSM", "ORCL", "RDDT",
];

/// Returns true if the ticker appears in [`KNOWN_TICKERS`] (case-insensitive).
#[must_use]
pub fn is_known_ticker(ticker: &str) -> bool {
    KNOWN_TICKERS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ticker))
}
