//! TeamCity build queue endpoints

use crate::error::ApiResult;
use crate::response::RawResponse;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the TeamCity REST API
pub struct TeamCityClient {
    client: Client,
    server: String,
    token: String,
}

impl TeamCityClient {
    /// Create a client for `server`, authenticating with a bearer token
    pub fn new(server: impl Into<String>, token: impl Into<String>) -> ApiResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            server: server.into(),
            token: token.into(),
        })
    }

    /// Queue a build, promoted to the top of the queue
    ///
    /// The payload is sent exactly as given; the response is returned as
    /// received, whatever its status.
    #[instrument(skip(self, payload))]
    pub async fn queue_build(&self, payload: &Value) -> ApiResult<RawResponse> {
        let url = build_queue_url(&self.server);
        let body = serde_json::to_vec(payload)?;
        debug!(url = %url, bytes = body.len(), "queueing build");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .body(body)
            .send()
            .await?;

        RawResponse::capture(response).await
    }
}

/// Build queue endpoint, with queue-priority promotion
fn build_queue_url(server: &str) -> String {
    format!(
        "{}/app/rest/buildQueue?moveToTop=true",
        server.trim_end_matches('/')
    )
}
