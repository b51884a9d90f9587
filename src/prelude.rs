/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Kwork Client Prelude
//!
//! Re-exports the types and traits needed for most interactions with the
//! Kwork API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kwork_client::prelude::*;
//!
//! let config = Config::with_credentials("login", "password");
//! let client = Client::new(config)?;
//! let dialogs = client.get_all_dialogs().await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

/// Logger setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

/// Failure classification
pub use crate::model::classifier::{ErrorClassifier, ErrorKind, TextErrorClassifier};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Service traits implemented by [`Client`]
pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::message::MessageService;
pub use crate::application::interfaces::project::ProjectService;

/// Session token handling
pub use crate::application::auth::{Token, TokenCache};

/// Page collection
pub use crate::application::paginator::Paginator;

// ============================================================================
// REQUESTS, RESPONSES AND TRANSPORT
// ============================================================================

/// Request executor and transport seam
pub use crate::model::http::{
    HttpClient, PreparedRequest, RawResponse, ReqwestTransport, Transport, TransportError,
};

/// Request descriptors
pub use crate::model::requests::{
    AuthMode, ProjectsRequest, RequestContext, RequestDescriptor, Target,
};

/// Response envelope
pub use crate::model::responses::{ApiResponse, Paging};

// ============================================================================
// RECORDS
// ============================================================================

/// Account records
pub use crate::presentation::account::{Actor, User};

/// Dialog records
pub use crate::presentation::dialog::{DialogMessage, InboxMessage, LastMessage};

/// Project records
pub use crate::presentation::project::{Category, Connects, Subcategory, WantWorker};
