/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # kwork-client
//!
//! Async client for the private Kwork marketplace API.
//!
//! The crate takes care of the tedious parts of talking to the service:
//! - Lazy sign-in and a shared, single-flight token cache
//! - Classification of failed responses (rate limit, authentication, generic)
//! - One transparent token refresh and retry when the server rejects a token
//! - Concurrent collection of paginated result sets
//!
//! # Example
//! ```ignore
//! use kwork_client::prelude::*;
//!
//! let config = Config::with_credentials("login", "password");
//! let client = Client::new(config)?;
//!
//! let me = client.get_me().await?;
//! let dialogs = client.get_all_dialogs().await?;
//! client.close().await;
//! ```

/// Application layer: configuration, token cache, pagination and the client facade
pub mod application;
/// Library wide constants
pub mod constants;
/// Error types
pub mod error;
/// Wire level models: requests, responses, transport and error classification
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Records returned by the API endpoints
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
