//! Error types for the API client

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Only transport and serialization failures are errors here. An HTTP
/// response with a 4xx/5xx status is still a response; callers receive
/// it as a [`crate::RawResponse`] and decide what to do with it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Build request template could not be read
    #[error("Failed to read payload template {}: {source}", path.display())]
    PayloadRead {
        /// Template path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Build request template is not valid JSON
    #[error("Failed to parse payload template {}: {source}", path.display())]
    PayloadParse {
        /// Template path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Build request template has the wrong top-level shape
    #[error("Payload template root must be a JSON object")]
    PayloadNotObject,
}
