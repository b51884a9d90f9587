use crate::presentation::serialization::{
    lenient_bool_opt, lenient_i64_opt, option_string_empty_as_none, string_as_float_opt,
    unix_time,
};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// The signed in account, as returned by the `actor` endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    /// Account identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub id: Option<i64>,
    /// User name
    pub username: Option<String>,
    /// Display name
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub fullname: Option<String>,
    /// E-mail address
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub email: Option<String>,
    /// Account status (`active`, `blocked`, ...)
    pub status: Option<String>,
    /// Account type (`worker`, `payer`)
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    /// Whether the account passed verification
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub verified: Option<bool>,
    /// Avatar URL
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub profilepicture: Option<String>,
    /// Profile description
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
    /// Seller level
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub level_description: Option<String>,
    /// City or country
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub location: Option<String>,
    /// Average rating
    #[serde(deserialize_with = "string_as_float_opt")]
    pub rating: Option<f64>,
    /// Number of ratings
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub rating_count: Option<i64>,
    /// Total balance
    #[serde(deserialize_with = "string_as_float_opt")]
    pub total_amount: Option<f64>,
    /// Amount on hold
    #[serde(deserialize_with = "string_as_float_opt")]
    pub hold_amount: Option<f64>,
    /// Amount available for withdrawal
    #[serde(deserialize_with = "string_as_float_opt")]
    pub free_amount: Option<f64>,
    /// Currency of the amounts
    pub currency: Option<String>,
    /// Number of unread dialogs
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub unread_dialog_count: Option<i64>,
    /// Number of unread notifications
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub notify_unread_count: Option<i64>,
}

/// Public profile of another user, as returned by the `user` endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub id: Option<i64>,
    /// User name
    pub username: Option<String>,
    /// Display name
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub fullname: Option<String>,
    /// Account status
    pub status: Option<String>,
    /// Avatar URL
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub profilepicture: Option<String>,
    /// Profile description
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
    /// Profession shown under the name
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub specialization: Option<String>,
    /// Seller level
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub level_description: Option<String>,
    /// City or country
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub location: Option<String>,
    /// Average rating
    #[serde(deserialize_with = "string_as_float_opt")]
    pub rating: Option<f64>,
    /// Number of ratings
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub rating_count: Option<i64>,
    /// Positive reviews
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub good_reviews: Option<i64>,
    /// Negative reviews
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub bad_reviews: Option<i64>,
    /// Whether the user is online right now
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub online: Option<bool>,
    /// Last time the user was seen, unix seconds
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub live_date: Option<i64>,
    /// Number of published services
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub kworks_count: Option<i64>,
    /// Number of completed orders
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub completed_orders_count: Option<i64>,
}

impl User {
    /// Last time the user was seen
    #[must_use]
    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        unix_time(self.live_date)
    }
}
