use reqwest::StatusCode;
use thiserror::Error;

/// Anything that stops a collection run. None of these are retried.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("error fetching page {page}: {source}")]
    Request {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("non-200 HTTP status on page {page}: {status}")]
    Status { page: u32, status: StatusCode },

    #[error("error reading HTML on page {page}: {source}")]
    Body {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid listing selector: {0}")]
    Selector(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl CollectError {
    /// Whether the failure looks like it could clear up on its own
    /// (timeouts, dropped connections, 5xx). Only used for reporting.
    pub fn is_transient(&self) -> bool {
        match self {
            CollectError::Request { source, .. } | CollectError::Body { source, .. } => {
                source.is_timeout() || source.is_connect()
            }
            CollectError::Status { status, .. } => status.is_server_error(),
            CollectError::Selector(_) | CollectError::Client(_) => false,
        }
    }
}
