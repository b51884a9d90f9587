/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Classification of failed API responses
//!
//! The service does not expose a structured error taxonomy, so failures are
//! classified from the human readable error text. The classifier sits behind a
//! trait so it can be replaced by a code based one without touching the
//! request executor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure kind of a response with `success == false`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Request limit reached. Surfaced immediately, never retried.
    RateLimit,
    /// Credentials or session token rejected. Recovered once by refreshing the token.
    Auth,
    /// Anything else
    Generic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::RateLimit => "rate_limit",
            ErrorKind::Auth => "auth",
            ErrorKind::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Maps a failed response to an [`ErrorKind`]
pub trait ErrorClassifier: Send + Sync {
    /// Classifies the error message (and code, when the implementation uses it)
    fn classify(&self, message: &str, code: Option<i64>) -> ErrorKind;
}

/// Substring based classifier matching the error strings of the live service
///
/// - contains `limit` → [`ErrorKind::RateLimit`]
/// - contains `auth` or `token` → [`ErrorKind::Auth`]
/// - otherwise → [`ErrorKind::Generic`]
///
/// Matching is case-insensitive and the checks run in that order.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextErrorClassifier;

impl ErrorClassifier for TextErrorClassifier {
    fn classify(&self, message: &str, _code: Option<i64>) -> ErrorKind {
        let message = message.to_lowercase();
        if message.contains("limit") {
            ErrorKind::RateLimit
        } else if message.contains("auth") || message.contains("token") {
            ErrorKind::Auth
        } else {
            ErrorKind::Generic
        }
    }
}
