//! Error types for the `web2txt` crate.

use std::error::Error as StdError;
use std::path::PathBuf;

use reqwest::StatusCode;

/// All errors that can abort a `web2txt` run.
#[derive(Debug, thiserror::Error)]
pub enum Web2TxtError {
    /// The URL argument was empty or could not be parsed into a URL with a host.
    #[error("{0}")]
    InvalidUrl(String),

    /// The page could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The HTML could not be turned into text.
    #[error("Error parsing HTML: {0}")]
    Parse(String),

    /// The output file exists in a location we are not allowed to write to.
    #[error("Permission denied: Cannot write to {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other filesystem failure while writing the output file.
    #[error("File system error: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failures outside the categories above (e.g. HTTP client setup).
    #[error("{0}")]
    Unexpected(Box<dyn StdError + Send + Sync>),
}

/// A type alias for `Result<T, Web2TxtError>`.
pub type Result<T> = std::result::Result<T, Web2TxtError>;

/// Network failures, categorized for the user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Not Found (404): {url}")]
    NotFound { url: String },

    #[error("Client Error ({status}): {url}")]
    Client { status: u16, url: String },

    #[error("Server Error ({status}): {url}")]
    Server { status: u16, url: String },

    #[error("Timeout: Could not connect to {url}")]
    Timeout { url: String },

    #[error("Connection Error: Could not connect to {url}")]
    Connection { url: String },

    #[error("Network Error: {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    /// Map an HTTP status to an error category, or `None` if the status is
    /// not a 4xx/5xx failure.
    pub fn from_status(status: StatusCode, url: &str) -> Option<Self> {
        let url = url.to_string();
        match status.as_u16() {
            404 => Some(Self::NotFound { url }),
            code @ 400..=499 => Some(Self::Client { status: code, url }),
            code @ 500..=599 => Some(Self::Server { status: code, url }),
            _ => None,
        }
    }

    /// Categorize a transport-level failure reported by the HTTP client.
    ///
    /// Status information wins over timeout, which wins over connection
    /// failures; everything else becomes a generic network error.
    pub fn from_transport(err: &reqwest::Error, url: &str) -> Self {
        if let Some(categorized) = err.status().and_then(|s| Self::from_status(s, url)) {
            return categorized;
        }

        let url = url.to_string();
        if err.is_timeout() {
            Self::Timeout { url }
        } else if err.is_connect() {
            Self::Connection { url }
        } else {
            Self::Network {
                url,
                message: error_chain(err),
            }
        }
    }

    /// The URL the failed request was aimed at.
    pub fn url(&self) -> &str {
        match self {
            Self::NotFound { url }
            | Self::Client { url, .. }
            | Self::Server { url, .. }
            | Self::Timeout { url }
            | Self::Connection { url }
            | Self::Network { url, .. } => url,
        }
    }
}

/// Render an error together with its `source()` chain, separated by `: `.
pub(crate) fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
