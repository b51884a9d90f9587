/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::serialization::{lenient_i64_opt, lenient_u32_opt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Paging metadata attached to paginated responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Total number of pages reported by the server
    #[serde(default, deserialize_with = "lenient_u32_opt")]
    pub pages: Option<u32>,
    /// Current page, when reported
    #[serde(default, deserialize_with = "lenient_u32_opt")]
    pub page: Option<u32>,
    /// Total number of records, when reported
    #[serde(default, deserialize_with = "lenient_u32_opt")]
    pub total: Option<u32>,
}

/// Envelope shared by every API response
///
/// Keys other than the documented ones (for example `connects` on the
/// `projects` endpoint) are kept in [`ApiResponse::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the call succeeded
    #[serde(default)]
    pub success: bool,
    /// Payload: an object or a list of records
    #[serde(default)]
    pub response: Value,
    /// Paging metadata
    #[serde(default)]
    pub paging: Option<Paging>,
    /// Error text on failure
    #[serde(default)]
    pub error: Option<String>,
    /// Error code on failure
    #[serde(default, deserialize_with = "lenient_i64_opt")]
    pub error_code: Option<i64>,
    /// Any other top level keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    /// Total pages reported by the server. Missing metadata counts as one page.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.paging.as_ref().and_then(|p| p.pages).unwrap_or(1)
    }

    /// Whether the response carries paging metadata
    #[must_use]
    pub fn has_paging(&self) -> bool {
        self.paging.is_some()
    }

    /// Records of a list payload. Any other payload yields no records.
    #[must_use]
    pub fn records(&self) -> &[Value] {
        match &self.response {
            Value::Array(items) => items,
            _ => &[],
        }
    }

    /// Consumes the response, returning the records of a list payload
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        match self.response {
            Value::Array(items) => items,
            _ => Vec::new(),
        }
    }

    /// Top level key outside of the envelope
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Decodes the payload into `T`
    ///
    /// # Errors
    /// Returns [`AppError::Json`] if the payload does not fit `T`
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.response)?)
    }

    /// Decodes every record of a list payload into `T`
    ///
    /// # Errors
    /// Returns [`AppError::Json`] if a record does not fit `T`
    pub fn decode_records<T: DeserializeOwned>(self) -> Result<Vec<T>, AppError> {
        decode_records(self.into_records())
    }
}

/// Decodes raw records into `T`
///
/// # Errors
/// Returns [`AppError::Json`] if a record does not fit `T`
pub fn decode_records<T: DeserializeOwned>(records: Vec<Value>) -> Result<Vec<T>, AppError> {
    records
        .into_iter()
        .map(|record| serde_json::from_value(record).map_err(AppError::from))
        .collect()
}
