//! HTTP client for the history endpoint.

use gexhist_types::{DEFAULT_BASE_URL, Settings};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::QueryOutcome;
use crate::url::request_url;

/// Configuration for the history client.
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URL.
    pub base_url: String,
    /// Credential sent as `Authorization: Basic <api_key>`.
    pub api_key: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: None,
            user_agent: format!("gexhist/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration carrying the endpoint and credential of the
    /// given settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            ..Self::default()
        }
    }

    /// Returns true if a non-blank credential is configured.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Errors that can occur while building the client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No credential configured.
    #[error("API credential is empty")]
    MissingCredential,

    /// The credential cannot be sent as a header value.
    #[error("API credential is not a valid header value: {0}")]
    InvalidCredential(#[from] InvalidHeaderValue),

    /// The underlying HTTP client could not be created.
    #[error("HTTP client error: {0}")]
    Build(#[from] reqwest::Error),
}

/// HTTP client that sends the JSON `Accept` header and the credential with
/// every request.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    client: Client,
    config: ClientConfig,
}

impl HistoryClient {
    /// Creates a new history client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is empty or not a valid header
    /// value, or if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if !config.has_credential() {
            return Err(ClientError::MissingCredential);
        }

        let mut authorization = HeaderValue::from_str(&format!("Basic {}", config.api_key))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Requests one history URL and classifies the response.
    ///
    /// Never fails: transport, status and decoding problems are all
    /// returned as [`QueryOutcome`] variants.
    pub async fn fetch(&self, url: &str) -> QueryOutcome {
        debug!(url, "requesting history url");

        let response = match self.client.get(request_url(url)).send().await {
            Ok(response) => response,
            Err(e) => return QueryOutcome::transport(&e),
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return QueryOutcome::transport(&e),
        };
        debug!(url, status = status.as_u16(), bytes = text.len(), "response received");

        if !status.is_success() {
            return QueryOutcome::HttpError {
                status: status.as_u16(),
                body: text,
            };
        }

        match serde_json::from_str(&text) {
            Ok(body) => QueryOutcome::Success {
                status: status.as_u16(),
                body,
            },
            Err(e) => QueryOutcome::Decode {
                status: status.as_u16(),
                error: e.to_string(),
                text,
            },
        }
    }
}
