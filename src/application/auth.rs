/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Session token management
//!
//! The token is obtained lazily on first use and kept until it is invalidated,
//! either explicitly or because the server rejected it. Sign-in is
//! single-flight: the lock guarding the cached token is held for the whole
//! sign-in, so concurrent callers that find the cache empty wait for the
//! sign-in in progress and then read the token it published.

use crate::error::AppError;
use std::fmt;
use std::future::Future;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Opaque session token
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Wraps a raw token value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token value, as sent on the wire
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Cache for the current session token
#[derive(Default)]
pub struct TokenCache {
    token: Mutex<Option<Token>>,
}

impl TokenCache {
    /// Creates an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token, signing in first if the cache is empty
    ///
    /// Only the first caller on an empty cache runs `sign_in`; concurrent
    /// callers wait for it and receive the same token. A failed sign-in leaves
    /// the cache empty so the next call tries again.
    ///
    /// # Errors
    /// Returns the error of the sign-in call
    pub async fn get<F, Fut>(&self, sign_in: F) -> Result<Token, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Token, AppError>>,
    {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }

        info!("No cached token, signing in");
        let token = sign_in().await?;
        *slot = Some(token.clone());
        debug!("Token cached");
        Ok(token)
    }

    /// Returns the cached token without signing in
    pub async fn peek(&self) -> Option<Token> {
        self.token.lock().await.clone()
    }

    /// Clears the cached token so the next [`TokenCache::get`] signs in again
    pub async fn invalidate(&self) {
        let mut slot = self.token.lock().await;
        if slot.take().is_some() {
            debug!("Token invalidated");
        }
    }

    /// Clears the cached token only if it is still `stale`
    ///
    /// Requests that failed with the same rejected token all call this; the
    /// first one clears it and the others leave the fresh token in place.
    /// Returns whether the cache was cleared.
    pub async fn invalidate_if(&self, stale: &Token) -> bool {
        let mut slot = self.token.lock().await;
        if slot.as_ref() == Some(stale) {
            *slot = None;
            debug!("Rejected token invalidated");
            true
        } else {
            false
        }
    }

    /// Replaces a token the server rejected and returns the current one
    ///
    /// If another caller already replaced `stale`, the newer token is returned
    /// without signing in again.
    ///
    /// # Errors
    /// Returns the error of the sign-in call
    pub async fn refresh<F, Fut>(&self, stale: &Token, sign_in: F) -> Result<Token, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Token, AppError>>,
    {
        self.invalidate_if(stale).await;
        self.get(sign_in).await
    }

    /// Clears the cache without waiting. Used on drop where awaiting is not possible.
    ///
    /// Returns `false` if a sign-in holds the lock.
    pub fn try_invalidate(&self) -> bool {
        match self.token.try_lock() {
            Ok(mut slot) => {
                *slot = None;
                true
            }
            Err(_) => false,
        }
    }
}

impl fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCache").finish_non_exhaustive()
    }
}
