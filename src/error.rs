//! Error types for the page analyzer.
//!
//! Extraction and scoring never fail: missing elements become defaults.
//! Errors only come from the adapters around them:
//! - `AppError`: loading the page, reading a timing snapshot, exporting
//! - `Result<T>`: Type alias for Results using AppError

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

/// Errors raised by the adapters around the extractor.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or malformed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// Reading or writing a local file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Timing snapshot could not be decoded
    #[error("Invalid timing snapshot: {0}")]
    TimingSnapshot(String),

    /// Command id or name not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Serializing the session state failed
    #[error("Export failed: {0}")]
    Export(String),
}

impl AppError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::NetworkError(msg.into())
    }

    /// Create an I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::network(error.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
