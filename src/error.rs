/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types for the Kwork client
//!
//! Every failure that originates from a request carries a [`RequestContext`]
//! with the method, URL and the parameters with sensitive values redacted.

use crate::model::classifier::ErrorKind;
use crate::model::requests::RequestContext;
use std::error::Error as StdError;

/// Boxed error used as the source of transport level failures
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A caller supplied argument violates a precondition. Raised before any network call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network or transport failure (timeout, connection reset, closed session)
    #[error("connection error: {message} [{context}]")]
    Connection {
        /// Human readable description
        message: String,
        /// Request the failure belongs to
        context: RequestContext,
        /// Underlying transport error
        #[source]
        source: Option<BoxError>,
    },

    /// The response was not JSON or could not be decoded
    #[error("protocol error (HTTP {status}): {message} [{context}]")]
    Protocol {
        /// Human readable description, including a body excerpt
        message: String,
        /// HTTP status of the offending response
        status: u16,
        /// Request the failure belongs to
        context: RequestContext,
    },

    /// The server rejected the credentials or the session token
    #[error("authentication error: {message}{} [{context}]", format_code(.code))]
    Auth {
        /// Error text reported by the server
        message: String,
        /// Error code reported by the server
        code: Option<i64>,
        /// Request the failure belongs to
        context: RequestContext,
    },

    /// The server reported that a request limit was hit
    #[error("rate limit exceeded: {message}{} [{context}]", format_code(.code))]
    RateLimit {
        /// Error text reported by the server
        message: String,
        /// Error code reported by the server
        code: Option<i64>,
        /// Request the failure belongs to
        context: RequestContext,
    },

    /// Any other failure reported by the server
    #[error("api error: {message}{} [{context}]", format_code(.code))]
    Api {
        /// Error text reported by the server
        message: String,
        /// Error code reported by the server
        code: Option<i64>,
        /// Request the failure belongs to
        context: RequestContext,
    },

    /// Unexpected failure while performing a request
    #[error("unexpected error: {message} [{context}]")]
    Unexpected {
        /// Human readable description
        message: String,
        /// Request the failure belongs to
        context: RequestContext,
        /// Underlying error
        #[source]
        source: Option<BoxError>,
    },

    /// Invalid client configuration (proxy URL, HTTP client construction)
    #[error("configuration error: {0}")]
    Config(String),

    /// A successful payload could not be decoded into the expected record
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_code(code: &Option<i64>) -> String {
    code.map(|c| format!(" (code {c})")).unwrap_or_default()
}

impl AppError {
    /// Builds the error matching a classified server failure
    #[must_use]
    pub fn from_kind(
        kind: ErrorKind,
        message: String,
        code: Option<i64>,
        context: RequestContext,
    ) -> Self {
        match kind {
            ErrorKind::RateLimit => AppError::RateLimit {
                message,
                code,
                context,
            },
            ErrorKind::Auth => AppError::Auth {
                message,
                code,
                context,
            },
            ErrorKind::Generic => AppError::Api {
                message,
                code,
                context,
            },
        }
    }

    /// Classification of a server reported failure, if this is one
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            AppError::RateLimit { .. } => Some(ErrorKind::RateLimit),
            AppError::Auth { .. } => Some(ErrorKind::Auth),
            AppError::Api { .. } => Some(ErrorKind::Generic),
            _ => None,
        }
    }

    /// Whether the failure is an authentication rejection
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth { .. })
    }

    /// Whether the failure should trigger a token refresh and one retry
    #[must_use]
    pub fn is_retryable_auth(&self) -> bool {
        self.is_auth()
    }

    /// Whether the failure is a rate limit rejection
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, AppError::RateLimit { .. })
    }

    /// Whether the failure is a caller side validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// Error code reported by the server, if any
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            AppError::Auth { code, .. }
            | AppError::RateLimit { code, .. }
            | AppError::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// Request context attached to the failure, if any
    #[must_use]
    pub fn context(&self) -> Option<&RequestContext> {
        match self {
            AppError::Connection { context, .. }
            | AppError::Protocol { context, .. }
            | AppError::Auth { context, .. }
            | AppError::RateLimit { context, .. }
            | AppError::Api { context, .. }
            | AppError::Unexpected { context, .. } => Some(context),
            _ => None,
        }
    }
}
