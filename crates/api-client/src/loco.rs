//! Loco (localise.biz) translation endpoints

use crate::error::ApiResult;
use crate::response::RawResponse;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use tracing::{debug, instrument};

/// Loco REST API root
pub const LOCO_API_BASE: &str = "https://localise.biz/api";

/// Environment variable consulted when no key is passed on the command line
pub const LOCO_API_KEY_ENV: &str = "LOCO_OS6_API_KEY";

/// Locales whose entries are machine-translated and safe to clear in bulk
///
/// Deletion walks this list in order, one request per locale.
pub const AUTO_TRANSLATED_LOCALES: [&str; 12] = [
    "ar", "de", "it", "ja", "ko", "pl", "pt", "ru", "zh-Hans", "es", "zh-Hant", "uk",
];

/// Client for the Loco translation management API
pub struct LocoClient {
    client: Client,
    api_key: String,
}

impl LocoClient {
    /// Create a client holding the API key for subsequent calls
    pub fn new(api_key: impl Into<String>) -> ApiResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Delete the translations of one asset in one locale
    ///
    /// Loco exposes this as a POST against the translation resource. The
    /// response is returned as received, whatever its status.
    #[instrument(skip(self))]
    pub async fn delete_translation(&self, id: &str, locale: &str) -> ApiResult<RawResponse> {
        let url = translation_url(LOCO_API_BASE, id, locale);
        debug!(url = %url, "deleting translation");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, auth_header(&self.api_key))
            .send()
            .await?;

        RawResponse::capture(response).await
    }
}

/// Translation resource for one asset and locale
fn translation_url(base: &str, id: &str, locale: &str) -> String {
    format!("{}/translations/{id}/{locale}", base.trim_end_matches('/'))
}

/// `Authorization` header value for a Loco API key
fn auth_header(api_key: &str) -> String {
    format!("Loco {api_key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_url_embeds_id_and_locale() {
        assert_eq!(
            translation_url(LOCO_API_BASE, "home.title", "zh-Hans"),
            "https://localise.biz/api/translations/home.title/zh-Hans"
        );
    }

    #[test]
    fn test_translation_url_trims_trailing_slash() {
        assert_eq!(
            translation_url("https://localise.biz/api/", "key", "de"),
            "https://localise.biz/api/translations/key/de"
        );
    }

    #[test]
    fn test_auth_header_uses_loco_scheme() {
        assert_eq!(auth_header("abc123"), "Loco abc123");
    }

    #[test]
    fn test_auto_translated_locales_are_distinct() {
        assert_eq!(AUTO_TRANSLATED_LOCALES.len(), 12);
        for (i, locale) in AUTO_TRANSLATED_LOCALES.iter().enumerate() {
            assert!(!AUTO_TRANSLATED_LOCALES[i + 1..].contains(locale));
        }
    }

    #[test]
    fn test_client_creation() {
        assert!(LocoClient::new("key").is_ok());
    }
}
