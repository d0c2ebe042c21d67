//! Raw response capture
//!
//! The CI tools report whatever the remote service answered instead of
//! interpreting it, so responses are drained into a plain status/body
//! pair as soon as they arrive.

use crate::error::ApiResult;
use reqwest::Response;

/// Status and body of one HTTP response, as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, unmodified
    pub body: String,
}

impl RawResponse {
    /// Drain a response into its status and body
    pub(crate) async fn capture(response: Response) -> ApiResult<Self> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Self { status, body })
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body pretty-printed when it parses as JSON, verbatim otherwise
    #[must_use]
    pub fn body_pretty(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or_else(|_| self.body.clone())
    }
}
