/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request execution
//!
//! [`HttpClient`] turns a [`RequestDescriptor`] into a decoded [`ApiResponse`]:
//! it resolves the URL, attaches the session token, throttles, sends the
//! request through a [`Transport`], validates the payload and classifies
//! failures. A request rejected for authentication is retried exactly once
//! with a fresh token.

use crate::application::auth::{Token, TokenCache};
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{
    BODY_EXCERPT_LEN, SIGN_IN_ENDPOINT, TOKEN_PARAM, UNKNOWN_ERROR, USER_AGENT,
};
use crate::error::{AppError, BoxError};
use crate::model::classifier::{ErrorClassifier, TextErrorClassifier};
use crate::model::requests::{AuthMode, RequestContext, RequestDescriptor};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Fully resolved request, ready to go on the wire
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Full URL, without query string
    pub url: String,
    /// Headers to send
    pub headers: Vec<(String, String)>,
    /// Query parameters, token included
    pub params: Vec<(String, String)>,
    /// Total timeout for the exchange
    pub timeout: Duration,
}

/// Raw HTTP response as returned by a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Value of the `Content-Type` header
    pub content_type: Option<String>,
    /// Response body
    pub body: String,
}

/// Failure raised by a [`Transport`]
#[derive(Debug)]
pub enum TransportError {
    /// Network level failure: connect error, timeout, reset
    Network(BoxError),
    /// Anything else
    Other(BoxError),
}

/// Sends prepared requests over the network
///
/// The executor only talks to this trait, which keeps it independent from the
/// HTTP stack and lets tests count and script network calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one HTTP exchange
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError>;

    /// Releases the underlying connections. Safe to call more than once.
    fn close(&self);
}

/// [`Transport`] backed by `reqwest`
///
/// Parameters are sent as a query string. The optional proxy from the
/// configuration applies to every request.
pub struct ReqwestTransport {
    client: Mutex<Option<reqwest::Client>>,
}

impl ReqwestTransport {
    /// Builds the HTTP client for the given configuration
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if the proxy URL is invalid or the client
    /// cannot be constructed
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(proxy) = config.proxy.as_deref() {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|_| AppError::Config("invalid proxy url".to_string()))?;
            builder = builder.proxy(proxy);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client: Mutex::new(Some(client)),
        })
    }

    fn client(&self) -> Option<reqwest::Client> {
        self.client
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        let client = self
            .client()
            .ok_or_else(|| TransportError::Other("transport is closed".into()))?;

        let mut builder = client
            .request(request.method.clone(), &request.url)
            .query(&request.params)
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(map_reqwest_error)?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }

    fn close(&self) {
        let mut client = self
            .client
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if client.take().is_some() {
            debug!("HTTP client released");
        }
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() {
        TransportError::Network(Box::new(e.without_url()))
    } else {
        TransportError::Other(Box::new(e.without_url()))
    }
}

/// Executes API requests with token handling, throttling and error classification
///
/// One `HttpClient` is one session: it owns the token cache and the transport.
/// Once closed, every request fails with [`AppError::Connection`].
pub struct HttpClient {
    config: Arc<Config>,
    transport: Arc<dyn Transport>,
    classifier: Arc<dyn ErrorClassifier>,
    tokens: TokenCache,
    rate_limiter: RateLimiter,
    closed: AtomicBool,
}

impl HttpClient {
    /// Creates a client that talks to the network through `reqwest`
    ///
    /// No request is made until the first call; sign-in is lazy.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] if the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client on top of the given transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let rate_limiter = RateLimiter::new(&config.rate_limiter);
        Self {
            config: Arc::new(config),
            transport,
            classifier: Arc::new(TextErrorClassifier),
            tokens: TokenCache::new(),
            rate_limiter,
            closed: AtomicBool::new(false),
        }
    }

    /// Replaces the error classifier
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn ErrorClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the session token, signing in if none is cached
    ///
    /// # Errors
    /// Returns the sign-in failure, typically [`AppError::Auth`]
    pub async fn token(&self) -> Result<Token, AppError> {
        self.tokens.get(|| self.sign_in()).await
    }

    /// Drops the cached token so the next request signs in again
    pub async fn invalidate_token(&self) {
        self.tokens.invalidate().await;
    }

    /// Executes a request and returns the decoded envelope of a successful response
    ///
    /// An authentication failure on a token carrying request invalidates the
    /// token and retries once with a fresh one. A second authentication
    /// failure is returned to the caller.
    ///
    /// # Errors
    /// - [`AppError::Validation`] for an empty endpoint or URL
    /// - [`AppError::Connection`] for network failures or a closed session
    /// - [`AppError::Protocol`] for non JSON or malformed responses
    /// - [`AppError::Auth`], [`AppError::RateLimit`] or [`AppError::Api`] for
    ///   failures reported by the server
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse, AppError> {
        if self.is_closed() {
            return Err(self.closed_error(descriptor));
        }
        descriptor.target.resolve(&self.config.rest_api.base_url)?;

        let mut token = match descriptor.auth {
            AuthMode::Token => Some(self.token().await?),
            AuthMode::Anonymous => None,
        };
        let mut retried = false;

        loop {
            let result = self.send_once(descriptor, token.as_ref()).await;
            match (result, token.take()) {
                (Err(e), Some(stale)) if e.is_retryable_auth() && !retried => {
                    warn!("Authentication error, refreshing token and retrying: {e}");
                    token = Some(self.tokens.refresh(&stale, || self.sign_in()).await?);
                    retried = true;
                }
                (Err(e), _) if e.is_auth() && retried => {
                    error!("Authentication failed even after token refresh: {e}");
                    return Err(e);
                }
                (result, _) => return result,
            }
        }
    }

    /// Signs in with the configured credentials and returns the new token
    ///
    /// The token is not cached; use [`HttpClient::token`] for that.
    ///
    /// # Errors
    /// Returns [`AppError::Auth`] if the credentials are rejected or the
    /// response carries no token
    pub async fn sign_in(&self) -> Result<Token, AppError> {
        let credentials = &self.config.credentials;
        let descriptor = RequestDescriptor::post(SIGN_IN_ENDPOINT)
            .anonymous()
            .param("login", &credentials.login)
            .param("password", &credentials.password)
            .opt_param("phone_last", credentials.phone_last.as_deref());

        let response = self.send_once(&descriptor, None).await?;
        match response.response.get("token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => {
                info!("Signed in as {}", credentials.login);
                Ok(Token::new(token))
            }
            _ => Err(AppError::Auth {
                message: "sign-in response carries no token".to_string(),
                code: None,
                context: self.context_for(&descriptor),
            }),
        }
    }

    /// Whether the session has been closed
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Closes the session: drops the token and releases the transport
    ///
    /// Calling it again is a no-op.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.tokens.invalidate().await;
        self.transport.close();
        info!("Session closed");
    }

    async fn send_once(
        &self,
        descriptor: &RequestDescriptor,
        token: Option<&Token>,
    ) -> Result<ApiResponse, AppError> {
        let url = descriptor.target.resolve(&self.config.rest_api.base_url)?;

        let mut params = descriptor.present_params();
        if let Some(token) = token {
            params.retain(|(key, _)| key != TOKEN_PARAM);
            params.push((TOKEN_PARAM.to_string(), token.as_str().to_string()));
        }
        let context = RequestContext::new(&descriptor.method, &url, &params);

        if self.is_closed() {
            return Err(AppError::Connection {
                message: "session closed".to_string(),
                context,
                source: None,
            });
        }

        debug!("Request: {context}");
        self.rate_limiter.wait().await;

        let request = PreparedRequest {
            method: descriptor.method.clone(),
            url,
            headers: vec![(
                AUTHORIZATION.as_str().to_string(),
                self.config.rest_api.api_key.clone(),
            )],
            params,
            timeout: descriptor.timeout.unwrap_or_else(|| self.config.timeout()),
        };

        let raw = match self.transport.send(&request).await {
            Ok(raw) => raw,
            Err(TransportError::Network(source)) => {
                error!("Network error: {source} [{context}]");
                return Err(AppError::Connection {
                    message: source.to_string(),
                    context,
                    source: Some(source),
                });
            }
            Err(TransportError::Other(source)) => {
                error!("Unexpected transport error: {source} [{context}]");
                return Err(AppError::Unexpected {
                    message: source.to_string(),
                    context,
                    source: Some(source),
                });
            }
        };

        parse_response(raw, context, self.classifier.as_ref())
    }

    fn context_for(&self, descriptor: &RequestDescriptor) -> RequestContext {
        let url = descriptor
            .target
            .resolve(&self.config.rest_api.base_url)
            .unwrap_or_else(|_| descriptor.target.to_string());
        RequestContext::new(&descriptor.method, &url, &descriptor.present_params())
    }

    fn closed_error(&self, descriptor: &RequestDescriptor) -> AppError {
        AppError::Connection {
            message: "session closed".to_string(),
            context: self.context_for(descriptor),
            source: None,
        }
    }
}

impl Drop for HttpClient {
    fn drop(&mut self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            debug!("HttpClient dropped without close, releasing session");
            self.tokens.try_invalidate();
            self.transport.close();
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

/// Validates and decodes a raw response
///
/// # Errors
/// - [`AppError::Protocol`] if the content type is not JSON, the body is not
///   valid JSON or it does not have the envelope shape
/// - the classified server error if `success` is false
pub fn parse_response(
    raw: RawResponse,
    context: RequestContext,
    classifier: &dyn ErrorClassifier,
) -> Result<ApiResponse, AppError> {
    if !is_json(raw.content_type.as_deref()) {
        let content_type = raw.content_type.as_deref().unwrap_or("none");
        error!(
            "Unexpected content type {content_type} (HTTP {}) [{context}]",
            raw.status
        );
        return Err(AppError::Protocol {
            message: format!(
                "unexpected content type {content_type}: {}",
                excerpt(&raw.body)
            ),
            status: raw.status,
            context,
        });
    }

    let value: Value = serde_json::from_str(&raw.body).map_err(|e| AppError::Protocol {
        message: format!("invalid json: {e}: {}", excerpt(&raw.body)),
        status: raw.status,
        context: context.clone(),
    })?;

    let response: ApiResponse =
        serde_json::from_value(value).map_err(|e| AppError::Protocol {
            message: format!("unexpected response shape: {e}"),
            status: raw.status,
            context: context.clone(),
        })?;

    debug!(
        "Response status: {}, success: {}",
        raw.status, response.success
    );

    if response.success {
        return Ok(response);
    }

    let message = response
        .error
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
    let code = response.error_code;
    let kind = classifier.classify(&message, code);
    debug!("API error classified as {kind}: {message}");

    Err(AppError::from_kind(kind, message, code, context))
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_LEN).collect()
}
