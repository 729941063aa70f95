//! Console rendering of query reports.

use gexhist_types::Combination;
use reqwest::StatusCode;
use std::io::{self, Write};

use crate::QueryOutcome;

/// A finished query: what was asked, where, and what came back.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryReport {
    /// The combination that was queried.
    pub combination: Combination,
    /// History URL, without the `noredirect` flag.
    pub url: String,
    /// Result of the request.
    pub outcome: QueryOutcome,
}

/// Writes one report block followed by a separator line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(out: &mut W, report: &QueryReport) -> io::Result<()> {
    writeln!(out, "--- Querying: {} ---", report.url)?;

    match &report.outcome {
        QueryOutcome::Success { status, body } => {
            writeln!(out, "Status: {status}")?;
            writeln!(out, "Response JSON (contains signed URL):")?;
            writeln!(out, "{}", serde_json::to_string_pretty(body)?)?;
        }
        QueryOutcome::HttpError { status, body } => {
            writeln!(
                out,
                "HTTP error occurred: {} for url: {}",
                status_line(*status),
                report.url
            )?;
            writeln!(out, "Status Code: {status}")?;
            writeln!(out, "Response Body: {body}")?;
        }
        QueryOutcome::Transport { message } => {
            writeln!(out, "An error occurred: {message}")?;
        }
        QueryOutcome::Decode { text, .. } => {
            writeln!(out, "Error: Failed to decode JSON from response.")?;
            writeln!(out, "Response Text: {text}")?;
        }
    }

    writeln!(out, "{}", separator(&report.url))?;
    writeln!(out)
}

/// Returns the dashed line closing a report block, sized to its URL.
#[must_use]
pub fn separator(url: &str) -> String {
    "-".repeat(20 + url.chars().count())
}

/// Formats a status code with its reason phrase, e.g. `404 Not Found`.
fn status_line(status: u16) -> String {
    match StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
    {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gexhist_types::Package;
    use serde_json::json;

    const URL: &str = "https://api.gex.bot/v2/hist/SPX/state/gex_full/2025-11-14";

    fn render(outcome: QueryOutcome) -> String {
        let report = QueryReport {
            combination: Combination::new("SPX", Package::State, "gex_full"),
            url: URL.to_string(),
            outcome,
        };
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_success_block() {
        let text = render(QueryOutcome::Success {
            status: 200,
            body: json!({"url": "https://example.com/signed"}),
        });
        let expected = format!(
            "--- Querying: {URL} ---\n\
             Status: 200\n\
             Response JSON (contains signed URL):\n\
             {{\n  \"url\": \"https://example.com/signed\"\n}}\n\
             {}\n\n",
            separator(URL)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_pretty_print_keeps_key_order() {
        let body: serde_json::Value =
            serde_json::from_str(r#"{"url": "u", "expires": 3600, "date": "d"}"#).unwrap();
        let text = render(QueryOutcome::Success { status: 200, body });
        let url_at = text.find("\"url\"").unwrap();
        let expires_at = text.find("\"expires\"").unwrap();
        let date_at = text.find("\"date\"").unwrap();
        assert!(url_at < expires_at && expires_at < date_at);
    }

    #[test]
    fn test_http_error_block() {
        let text = render(QueryOutcome::HttpError {
            status: 404,
            body: "not found".to_string(),
        });
        assert!(text.contains(&format!("HTTP error occurred: 404 Not Found for url: {URL}")));
        assert!(text.contains("Status Code: 404\n"));
        assert!(text.contains("Response Body: not found\n"));
    }

    #[test]
    fn test_transport_block() {
        let text = render(QueryOutcome::Transport {
            message: "error sending request: Connection refused".to_string(),
        });
        assert!(text.contains("An error occurred: error sending request: Connection refused\n"));
        assert!(text.ends_with(&format!("{}\n\n", separator(URL))));
    }

    #[test]
    fn test_decode_block() {
        let text = render(QueryOutcome::Decode {
            status: 200,
            error: "expected value at line 1 column 1".to_string(),
            text: "<html>".to_string(),
        });
        assert!(text.contains("Error: Failed to decode JSON from response.\n"));
        assert!(text.contains("Response Text: <html>\n"));
    }

    #[test]
    fn test_separator_length() {
        assert_eq!(separator("abc").len(), 23);
        assert_eq!(separator(URL).len(), URL.len() + 20);
    }

    #[test]
    fn test_unknown_status_reason() {
        assert_eq!(status_line(599), "599");
        assert_eq!(status_line(503), "503 Service Unavailable");
    }
}
