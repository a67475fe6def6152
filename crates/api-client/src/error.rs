use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApiErrorKind {
    /// No response within the configured timeout
    Timeout,
    /// DNS, connect or other failure before a response arrived
    Transport,
    /// Non-2xx response
    Status,
}

/// A failed backend call, reduced to one human-readable message.
///
/// The message is, in priority order: the `message` field of the error body,
/// the HTTP status line, or the calling operation's fallback text when no
/// usable response arrived.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        let message = body
            .and_then(server_message)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        Self {
            kind: ApiErrorKind::Status,
            status: Some(status),
            message,
        }
    }

    pub fn from_transport(err: &reqwest::Error, fallback: &str) -> Self {
        let kind = if err.is_timeout() {
            ApiErrorKind::Timeout
        } else {
            ApiErrorKind::Transport
        };

        Self {
            kind,
            status: None,
            message: fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

/// Non-blank `message` string of an error body.
pub fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Client construction failures.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}
