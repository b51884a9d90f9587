use crate::presentation::serialization::{
    lenient_bool_opt, lenient_i64_opt, null_as_default, option_string_empty_as_none,
    string_as_float_opt, unix_time,
};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Project posted by a buyer on the exchange
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WantWorker {
    /// Project identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub id: Option<i64>,
    /// Buyer identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub user_id: Option<i64>,
    /// Buyer user name
    pub username: Option<String>,
    /// Buyer avatar URL
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub profile_picture: Option<String>,
    /// Title
    pub title: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Desired budget
    #[serde(deserialize_with = "string_as_float_opt")]
    pub price: Option<f64>,
    /// Highest acceptable budget
    #[serde(deserialize_with = "string_as_float_opt")]
    pub possible_price_limit: Option<f64>,
    /// Whether offers above the budget are accepted
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub allow_higher_price: Option<bool>,
    /// Offers made so far
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub offers: Option<i64>,
    /// Category identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub category_id: Option<i64>,
    /// Parent category identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub parent_category_id: Option<i64>,
    /// Share of the buyer's projects that ended with a hire, in percent
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub user_hired_percent: Option<i64>,
    /// Projects published by the buyer
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub user_projects_count: Option<i64>,
    /// Whether the account already made an offer
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub already_work: Option<bool>,
    /// Seconds until the project closes
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub time_left: Option<i64>,
    /// Publication time, unix seconds
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub date_create: Option<i64>,
    /// Closing time, unix seconds
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub date_expire: Option<i64>,
}

impl WantWorker {
    /// Publication time
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.date_create)
    }

    /// Closing time
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.date_expire)
    }
}

/// Offer quota of the account
#[derive(
    DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Connects {
    /// Offers available per period
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub all_connects: Option<i64>,
    /// Offers left in the current period
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub active_connects: Option<i64>,
    /// Next replenishment, unix seconds
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub update_time: Option<i64>,
}

impl Connects {
    /// Next replenishment of the quota
    #[must_use]
    pub fn next_update(&self) -> Option<DateTime<Utc>> {
        unix_time(self.update_time)
    }
}

/// Top level category of the exchange
#[derive(
    DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Category {
    /// Category identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub id: Option<i64>,
    /// Name
    pub name: Option<String>,
    /// Description
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
    /// Child categories
    #[serde(deserialize_with = "null_as_default")]
    pub subcategories: Vec<Subcategory>,
}

/// Child category, the level project searches filter on
#[derive(
    DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Subcategory {
    /// Category identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub id: Option<i64>,
    /// Name
    pub name: Option<String>,
    /// Description
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
    /// Parent identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub parent: Option<i64>,
}

impl Category {
    /// Identifiers of the child categories
    #[must_use]
    pub fn subcategory_ids(&self) -> Vec<u64> {
        self.subcategories
            .iter()
            .filter_map(|s| s.id)
            .filter_map(|id| u64::try_from(id).ok())
            .collect()
    }
}
