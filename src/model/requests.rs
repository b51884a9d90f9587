/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{PAGE_PARAM, REDACTED, SENSITIVE_PARAMS};
use crate::error::AppError;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Where a request is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Named endpoint resolved against the configured base URL
    Endpoint(String),
    /// Absolute URL used as is
    Url(String),
}

impl Target {
    /// Resolves the target into a full URL
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] if the endpoint name or URL is empty
    pub fn resolve(&self, base_url: &str) -> Result<String, AppError> {
        match self {
            Target::Endpoint(name) if !name.trim().is_empty() => Ok(format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                name.trim_start_matches('/')
            )),
            Target::Url(url) if !url.trim().is_empty() => Ok(url.clone()),
            _ => Err(AppError::Validation(
                "an endpoint name or a full url is required".to_string(),
            )),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Endpoint(name) => write!(f, "{name}"),
            Target::Url(url) => f.write_str(&sanitize_url(url)),
        }
    }
}

/// Whether the session token is attached to a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// No token (sign-in)
    Anonymous,
    /// The executor injects the cached session token as the `token` parameter
    Token,
}

/// One logical API request
///
/// Parameters keep their insertion order. A parameter set to `None` is kept in
/// the descriptor and dropped when the outgoing request is built.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Endpoint name or absolute URL
    pub target: Target,
    /// Parameter mapping
    pub params: Vec<(String, Option<String>)>,
    /// Per-request timeout. `None` uses the configured default.
    pub timeout: Option<Duration>,
    /// Token handling
    pub auth: AuthMode,
}

impl RequestDescriptor {
    /// Creates an authenticated request for the given method and target
    #[must_use]
    pub fn new(method: Method, target: Target) -> Self {
        Self {
            method,
            target,
            params: Vec::new(),
            timeout: None,
            auth: AuthMode::Token,
        }
    }

    /// Creates a request from an optional endpoint name and an optional absolute URL
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] unless exactly one of them is given
    pub fn from_parts(
        method: Method,
        endpoint: Option<&str>,
        full_url: Option<&str>,
    ) -> Result<Self, AppError> {
        match (endpoint, full_url) {
            (Some(endpoint), None) => Ok(Self::new(method, Target::Endpoint(endpoint.to_string()))),
            (None, Some(url)) => Ok(Self::new(method, Target::Url(url.to_string()))),
            (None, None) => Err(AppError::Validation(
                "an endpoint name or a full url is required".to_string(),
            )),
            (Some(_), Some(_)) => Err(AppError::Validation(
                "only one of endpoint name and full url may be given".to_string(),
            )),
        }
    }

    /// Authenticated POST to a named endpoint
    #[must_use]
    pub fn post(endpoint: &str) -> Self {
        Self::new(Method::POST, Target::Endpoint(endpoint.to_string()))
    }

    /// Authenticated POST to an absolute URL
    #[must_use]
    pub fn post_url(url: &str) -> Self {
        Self::new(Method::POST, Target::Url(url.to_string()))
    }

    /// Marks the request as not carrying the session token
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.auth = AuthMode::Anonymous;
        self
    }

    /// Sets a parameter, replacing any previous value for the key
    #[must_use]
    pub fn param(self, key: &str, value: impl ToString) -> Self {
        self.opt_param(key, Some(value))
    }

    /// Sets an optional parameter. `None` values never reach the wire.
    #[must_use]
    pub fn opt_param<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        self.set(key, value.map(|v| v.to_string()));
        self
    }

    /// Sets the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Copy of this request asking for the given page
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        self.clone().param(PAGE_PARAM, page)
    }

    /// Value of a parameter, if set and not `None`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Parameters that are actually sent, in insertion order
    #[must_use]
    pub fn present_params(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
            .collect()
    }

    fn set(&mut self, key: &str, value: Option<String>) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
    }
}

/// Returns a copy of the parameters with sensitive values replaced
#[must_use]
pub fn sanitize_params(params: &[(String, String)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| {
            if is_sensitive(k) {
                (k.clone(), REDACTED.to_string())
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect()
}

/// Returns the URL with the values of sensitive query parameters replaced
#[must_use]
pub fn sanitize_url(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let (query, fragment) = match query.split_once('#') {
        Some((query, fragment)) => (query, Some(fragment)),
        None => (query, None),
    };

    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if is_sensitive(key) => format!("{key}={REDACTED}"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");

    match fragment {
        Some(fragment) => format!("{base}?{query}#{fragment}"),
        None => format!("{base}?{query}"),
    }
}

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_PARAMS
        .iter()
        .any(|sensitive| key.eq_ignore_ascii_case(sensitive))
}

/// Diagnostic description of a request, safe to log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// HTTP method
    pub method: String,
    /// Full URL
    pub url: String,
    /// Parameters with sensitive values redacted
    pub params: Vec<(String, String)>,
}

impl RequestContext {
    /// Builds a context, redacting the given parameters
    #[must_use]
    pub fn new(method: &Method, url: &str, params: &[(String, String)]) -> Self {
        Self {
            method: method.to_string(),
            url: sanitize_url(url),
            params: sanitize_params(params),
        }
    }

    /// Parameters rendered as `{key: value, ...}`
    #[must_use]
    pub fn params_display(&self) -> String {
        let inner = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{inner}}}")
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.url, self.params_display())
    }
}

/// Search criteria for the `projects` endpoint
///
/// When `page` is set only that page is returned, otherwise all pages are
/// collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsRequest {
    /// Category identifiers, must not be empty
    pub categories: Vec<u64>,
    /// Minimum budget
    pub price_from: Option<u64>,
    /// Maximum budget
    pub price_to: Option<u64>,
    /// Minimum hiring percentage of the buyer
    pub hiring_from: Option<u32>,
    /// Minimum number of offers
    pub kworks_filter_from: Option<u32>,
    /// Maximum number of offers
    pub kworks_filter_to: Option<u32>,
    /// Single page to fetch
    pub page: Option<u32>,
    /// Free text search
    pub query: Option<String>,
}

impl ProjectsRequest {
    /// Creates a search over the given categories
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = u64>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Restricts the budget range
    #[must_use]
    pub fn price_range(mut self, from: Option<u64>, to: Option<u64>) -> Self {
        self.price_from = from;
        self.price_to = to;
        self
    }

    /// Restricts the buyer hiring percentage
    #[must_use]
    pub fn hiring_from(mut self, hiring_from: u32) -> Self {
        self.hiring_from = Some(hiring_from);
        self
    }

    /// Restricts the number of offers already made
    #[must_use]
    pub fn offers_range(mut self, from: Option<u32>, to: Option<u32>) -> Self {
        self.kworks_filter_from = from;
        self.kworks_filter_to = to;
        self
    }

    /// Fetches only the given page
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Free text search
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Categories joined the way the endpoint expects them
    #[must_use]
    pub fn categories_param(&self) -> String {
        self.categories
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Validates the criteria and builds the request, without the page parameter
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] if no category is given
    pub fn to_descriptor(&self) -> Result<RequestDescriptor, AppError> {
        if self.categories.is_empty() {
            return Err(AppError::Validation(
                "categories cannot be empty".to_string(),
            ));
        }
        Ok(RequestDescriptor::post("projects")
            .param("categories", self.categories_param())
            .opt_param("price_from", self.price_from)
            .opt_param("price_to", self.price_to)
            .opt_param("hiring_from", self.hiring_from)
            .opt_param("kworks_filter_from", self.kworks_filter_from)
            .opt_param("kworks_filter_to", self.kworks_filter_to)
            .opt_param("query", self.query.as_deref()))
    }
}
