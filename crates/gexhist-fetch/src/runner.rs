//! Request runner: queries every combination and reports each result.

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use gexhist_types::{Combination, ConfigError, DATE_FORMAT, Settings};
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info};

use crate::report::{QueryReport, write_report};
use crate::url::history_url;
use crate::{ClientConfig, ClientError, HistoryClient, QueryOutcome};

/// Errors that stop a run. Per-request failures never do.
#[derive(Error, Debug)]
pub enum RunError {
    /// The run configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be created.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Writing the report failed.
    #[error("Cannot write report: {0}")]
    Io(#[from] io::Error),
}

/// Outcome counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Requests issued.
    pub total: usize,
    /// Requests that returned JSON with a 2xx status.
    pub succeeded: usize,
    /// Requests answered with a non-2xx status.
    pub http_errors: usize,
    /// Requests that failed before a response arrived.
    pub transport_errors: usize,
    /// 2xx responses that were not valid JSON.
    pub decode_errors: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &QueryOutcome) {
        self.total += 1;
        match outcome {
            QueryOutcome::Success { .. } => self.succeeded += 1,
            QueryOutcome::HttpError { .. } => self.http_errors += 1,
            QueryOutcome::Transport { .. } => self.transport_errors += 1,
            QueryOutcome::Decode { .. } => self.decode_errors += 1,
        }
    }

    /// Returns the number of requests that did not succeed.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} queried: {} succeeded, {} http errors, {} transport errors, {} decode errors",
            self.total, self.succeeded, self.http_errors, self.transport_errors, self.decode_errors
        )
    }
}

/// Queries combinations for one date and writes a report block per query.
///
/// By default one request is in flight at a time. With
/// [`Runner::with_concurrency`] several run at once, but reports are still
/// written in combination order.
#[derive(Debug, Clone)]
pub struct Runner {
    config: ClientConfig,
    date: NaiveDate,
    concurrency: usize,
}

impl Runner {
    /// Creates a sequential runner.
    #[must_use]
    pub const fn new(config: ClientConfig, date: NaiveDate) -> Self {
        Self {
            config,
            date,
            concurrency: 1,
        }
    }

    /// Creates a sequential runner for the endpoint, credential and date of
    /// the given settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(ClientConfig::from_settings(settings), settings.date)
    }

    /// Sets the maximum number of requests in flight. Zero is treated as one.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the query date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Queries every combination, writing each report to `out` as it
    /// completes.
    ///
    /// Writes a message and returns before any request when the credential
    /// is missing (an error) or there is nothing to query (an empty
    /// summary). The HTTP client lives only for the duration of this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is missing, the client cannot be
    /// built, or writing to `out` fails.
    pub async fn run<W: Write>(
        &self,
        combinations: &[Combination],
        out: &mut W,
    ) -> Result<RunSummary, RunError> {
        if !self.config.has_credential() {
            let err = ConfigError::MissingCredential;
            writeln!(out, "Error: {err}")?;
            return Err(err.into());
        }

        if combinations.is_empty() {
            writeln!(
                out,
                "No active ticker/category combinations selected. Exiting."
            )?;
            return Ok(RunSummary::default());
        }

        writeln!(
            out,
            "Generated {} combinations to query for {}...",
            combinations.len(),
            self.date.format(DATE_FORMAT)
        )?;
        info!(
            combinations = combinations.len(),
            date = %self.date,
            concurrency = self.concurrency,
            "starting history run"
        );

        let client = HistoryClient::new(self.config.clone())?;
        let client = &client;
        let date = self.date;

        let mut reports = stream::iter(combinations)
            .map(move |combination| async move {
                let url = history_url(&client.config().base_url, combination, date);
                let outcome = client.fetch(&url).await;
                QueryReport {
                    combination: combination.clone(),
                    url,
                    outcome,
                }
            })
            .buffered(self.concurrency);

        let mut summary = RunSummary::default();
        while let Some(report) = reports.next().await {
            if !report.outcome.is_success() {
                debug!(
                    combination = %report.combination,
                    status = ?report.outcome.status(),
                    "{}",
                    report.outcome.kind()
                );
            }
            summary.record(&report.outcome);
            write_report(out, &report)?;
        }

        info!(%summary, "history run finished");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gexhist_types::{Package, Selection};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// What the stub server does with an accepted request.
    enum Reply {
        Respond {
            status: u16,
            body: &'static str,
            delay: Option<Duration>,
        },
        Hangup,
    }

    fn respond(status: u16, body: &'static str) -> Reply {
        Reply::Respond {
            status,
            body,
            delay: None,
        }
    }

    /// Local HTTP/1.1 server answering each connection through a handler
    /// that sees the request index and head.
    struct Stub {
        base_url: String,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl Stub {
        async fn spawn<F>(handler: F) -> Self
        where
            F: Fn(usize, &str) -> Reply + Send + Sync + 'static,
        {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let base_url = format!("http://{}", listener.local_addr().unwrap());
            let requests = Arc::new(Mutex::new(Vec::new()));
            let handler = Arc::new(handler);

            let seen = Arc::clone(&requests);
            tokio::spawn(async move {
                while let Ok((socket, _)) = listener.accept().await {
                    let handler = Arc::clone(&handler);
                    let seen = Arc::clone(&seen);
                    tokio::spawn(serve(socket, handler, seen));
                }
            });

            Self { base_url, requests }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn serve<F>(mut socket: TcpStream, handler: Arc<F>, seen: Arc<Mutex<Vec<String>>>)
    where
        F: Fn(usize, &str) -> Reply + Send + Sync + 'static,
    {
        let head = read_head(&mut socket).await;
        let index = {
            let mut seen = seen.lock().unwrap();
            seen.push(head.clone());
            seen.len() - 1
        };

        match handler(index, &head) {
            Reply::Respond {
                status,
                body,
                delay,
            } => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                let response = format!(
                    "HTTP/1.1 {status} STUB\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
            Reply::Hangup => drop(socket),
        }
    }

    async fn read_head(socket: &mut TcpStream) -> String {
        let mut head = Vec::new();
        let mut chunk = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&chunk[..n]);
        }
        String::from_utf8_lossy(&head).into_owned()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 14).unwrap()
    }

    fn runner(base_url: &str, api_key: &str) -> Runner {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            timeout: Some(Duration::from_secs(10)),
            ..ClientConfig::default()
        };
        Runner::new(config, date())
    }

    fn spx_gex() -> Vec<Combination> {
        vec![Combination::new("SPX", Package::State, "gex_full")]
    }

    async fn run(runner: &Runner, combos: &[Combination]) -> (Result<RunSummary, RunError>, String) {
        let mut out = Vec::new();
        let result = runner.run(combos, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_success_prints_pretty_json() {
        let stub = Stub::spawn(|_, _| respond(200, r#"{"url": "https://example.com/signed"}"#)).await;

        let (result, text) = run(&runner(&stub.base_url, "test-key"), &spx_gex()).await;
        let summary = result.unwrap();

        assert_eq!(summary.total, 1);
        assert_eq!(summary.succeeded, 1);
        assert!(text.starts_with("Generated 1 combinations to query for 2025-11-14...\n"));
        assert!(text.contains("Status: 200\n"));
        assert!(text.contains("{\n  \"url\": \"https://example.com/signed\"\n}\n"));
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_request_shape() {
        let stub = Stub::spawn(|_, _| respond(200, r#"{"url": "x"}"#)).await;

        let (result, text) = run(&runner(&stub.base_url, "test-key"), &spx_gex()).await;
        result.unwrap();

        let head = stub.requests()[0].to_lowercase();
        assert!(head.starts_with("get /v2/hist/spx/state/gex_full/2025-11-14?noredirect http/1.1\r\n"));
        assert!(head.contains("\r\naccept: application/json\r\n"));
        assert!(head.contains("\r\nauthorization: basic test-key\r\n"));
        assert!(text.contains(&format!(
            "--- Querying: {}/v2/hist/SPX/state/gex_full/2025-11-14 ---\n",
            stub.base_url
        )));
    }

    #[tokio::test]
    async fn test_http_error_is_not_fatal() {
        let stub = Stub::spawn(|_, _| respond(404, "not found")).await;

        let (result, text) = run(&runner(&stub.base_url, "test-key"), &spx_gex()).await;
        let summary = result.unwrap();

        assert_eq!(summary.http_errors, 1);
        assert_eq!(summary.failed(), 1);
        assert!(text.contains("HTTP error occurred: 404 Not Found"));
        assert!(text.contains("Status Code: 404\n"));
        assert!(text.contains("Response Body: not found\n"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let stub = Stub::spawn(|_, _| respond(200, "<html>oops</html>")).await;

        let (result, text) = run(&runner(&stub.base_url, "test-key"), &spx_gex()).await;
        let summary = result.unwrap();

        assert_eq!(summary.decode_errors, 1);
        assert!(text.contains("Error: Failed to decode JSON from response.\n"));
        assert!(text.contains("Response Text: <html>oops</html>\n"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_isolated() {
        let stub = Stub::spawn(|index, _| {
            if index == 0 {
                Reply::Hangup
            } else {
                respond(200, r#"{"url": "https://example.com/signed"}"#)
            }
        })
        .await;
        let combos = vec![
            Combination::new("SPX", Package::State, "gex_full"),
            Combination::new("NDX", Package::State, "gex_full"),
        ];

        let (result, text) = run(&runner(&stub.base_url, "test-key"), &combos).await;
        let summary = result.unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.transport_errors, 1);
        assert_eq!(summary.succeeded, 1);

        let failure_at = text.find("An error occurred:").unwrap();
        let ndx_at = text.find("/v2/hist/NDX/").unwrap();
        let success_at = text.find("Status: 200").unwrap();
        assert!(failure_at < ndx_at && ndx_at < success_at);
        assert_eq!(stub.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base_url = format!("http://127.0.0.1:{port}");

        let (result, text) = run(&runner(&base_url, "test-key"), &spx_gex()).await;
        let summary = result.unwrap();

        assert_eq!(summary.transport_errors, 1);
        assert!(text.contains("An error occurred:"));
    }

    #[tokio::test]
    async fn test_missing_credential_sends_nothing() {
        let stub = Stub::spawn(|_, _| respond(200, "{}")).await;

        let (result, text) = run(&runner(&stub.base_url, ""), &spx_gex()).await;

        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::MissingCredential))
        ));
        assert_eq!(text, "Error: GEXBOT_API_KEY is not set. Export it before running a query.\n");
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_selection_sends_nothing() {
        let stub = Stub::spawn(|_, _| respond(200, "{}")).await;
        let combos = Selection::empty().combinations();

        let (result, text) = run(&runner(&stub.base_url, "test-key"), &combos).await;

        assert_eq!(result.unwrap(), RunSummary::default());
        assert_eq!(text, "No active ticker/category combinations selected. Exiting.\n");
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_run_keeps_order() {
        let stub = Stub::spawn(|_, head| {
            if head.contains("/SPX/") {
                Reply::Respond {
                    status: 200,
                    body: r#"{"url": "spx"}"#,
                    delay: Some(Duration::from_millis(200)),
                }
            } else {
                respond(200, r#"{"url": "ndx"}"#)
            }
        })
        .await;
        let combos = vec![
            Combination::new("SPX", Package::Classic, "gex_full"),
            Combination::new("NDX", Package::Classic, "gex_full"),
        ];

        let runner = runner(&stub.base_url, "test-key").with_concurrency(2);
        let (result, text) = run(&runner, &combos).await;

        assert_eq!(result.unwrap().succeeded, 2);
        let spx_at = text.find("\"spx\"").unwrap();
        let ndx_at = text.find("\"ndx\"").unwrap();
        assert!(spx_at < ndx_at);
    }

    #[test]
    fn test_zero_concurrency_is_sequential() {
        let runner = runner("http://localhost", "k").with_concurrency(0);
        assert_eq!(runner.concurrency, 1);
    }

    #[test]
    fn test_summary_display() {
        let mut summary = RunSummary::default();
        summary.record(&QueryOutcome::HttpError {
            status: 500,
            body: String::new(),
        });
        assert_eq!(
            summary.to_string(),
            "1 queried: 0 succeeded, 1 http errors, 0 transport errors, 0 decode errors"
        );
    }
}
