use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while fetching a sheet export.
/// Every variant ends the load cycle; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection-level failure (DNS, refused, reset).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16, body: String },
    /// The response body could not be read as text.
    Body(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, .. } => {
                write!(f, "Network response was not ok: {status}")
            }
            FetchError::Body(msg) => write!(f, "failed to read response body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Where sheet exports come from.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches the raw CSV text at `url`, bypassing any cache.
    async fn fetch_csv(&self, url: &str) -> Result<String, FetchError>;
}
