/// Error types for the stats library
use thiserror::Error;

/// Main error type for stats and token operations
#[derive(Error, Debug)]
pub enum StatsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Upstream answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },

    /// Failed to encode or decode JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read or write the token file
    #[error("Token file error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for StatsError {
    fn from(e: reqwest::Error) -> Self {
        StatsError::Http(Box::new(e))
    }
}

/// Type alias for Results using StatsError
pub type Result<T> = std::result::Result<T, StatsError>;
