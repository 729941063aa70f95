//! Per-request results.

use serde_json::Value;

/// The result of one history request.
///
/// None of the variants stop a run; the runner reports each and moves on.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// 2xx response with a JSON body.
    Success {
        /// HTTP status code.
        status: u16,
        /// Decoded response body.
        body: Value,
    },

    /// Non-2xx response.
    HttpError {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The request never produced a complete response.
    Transport {
        /// Error description including its cause chain.
        message: String,
    },

    /// 2xx response whose body is not valid JSON.
    Decode {
        /// HTTP status code.
        status: u16,
        /// JSON parser error.
        error: String,
        /// Raw response body.
        text: String,
    },
}

impl QueryOutcome {
    /// Creates a transport outcome from a client error.
    #[must_use]
    pub fn transport(error: &reqwest::Error) -> Self {
        Self::Transport {
            message: describe_error(error),
        }
    }

    /// Returns true for [`QueryOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Success { status, .. }
            | Self::HttpError { status, .. }
            | Self::Decode { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    /// Returns a short label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::HttpError { .. } => "http error",
            Self::Transport { .. } => "transport error",
            Self::Decode { .. } => "decode error",
        }
    }
}

/// Renders an error followed by each of its sources.
///
/// reqwest's own message names only the failed step ("error sending request
/// for url ..."); the cause ("Connection refused", "dns error") is in the
/// source chain.
fn describe_error(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_describe_error_chain() {
        let error = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(
            describe_error(&error),
            "error sending request: Connection refused"
        );
    }

    #[test]
    fn test_status_and_kind() {
        let ok = QueryOutcome::Success {
            status: 200,
            body: json!({"url": "https://example.com/signed"}),
        };
        assert!(ok.is_success());
        assert_eq!(ok.status(), Some(200));

        let failed = QueryOutcome::Transport {
            message: "timed out".to_string(),
        };
        assert!(!failed.is_success());
        assert_eq!(failed.status(), None);
        assert_eq!(failed.kind(), "transport error");
    }
}
