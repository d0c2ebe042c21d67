//! HTTP clients for the oneSafe 6 release tooling
//!
//! This crate backs the CI command line tools with two small clients:
//!
//! - **Loco** (`localise.biz`): bulk deletion of auto-translated entries
//! - **TeamCity**: queueing beta builds from a JSON request template
//!
//! Both clients issue one request at a time and hand back the raw
//! response, leaving status handling to the caller. Credential
//! resolution is a plain function over an injected environment lookup,
//! so it is testable without touching process state.
//!
//! # Example
//!
//! ```rust,no_run
//! use os6_api_client::loco::{AUTO_TRANSLATED_LOCALES, LocoClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LocoClient::new("my-api-key")?;
//!
//!     for locale in AUTO_TRANSLATED_LOCALES {
//!         let response = client.delete_translation("asset.key", locale).await?;
//!         println!("{locale}: {}", response.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod credentials;
pub mod error;
pub mod loco;
pub mod payload;
pub mod response;
pub mod teamcity;

pub use credentials::MissingCredential;
pub use error::{ApiError, ApiResult};
pub use loco::LocoClient;
pub use response::RawResponse;
pub use teamcity::TeamCityClient;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::credentials::MissingCredential;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::loco::{AUTO_TRANSLATED_LOCALES, LOCO_API_KEY_ENV, LocoClient};
    pub use crate::response::RawResponse;
    pub use crate::teamcity::TeamCityClient;
}
