/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::serialization::{
    lenient_bool_opt, lenient_i64_opt, option_string_empty_as_none, unix_time,
};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Preview of the newest message of a dialog
#[derive(
    DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct LastMessage {
    /// Whether the message is unread
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub unread: Option<bool>,
    /// Sender user name
    #[serde(rename = "fromUsername")]
    pub from_username: Option<String>,
    /// Sender identifier
    #[serde(rename = "fromUserId", deserialize_with = "lenient_i64_opt")]
    pub from_user_id: Option<i64>,
    /// Message type
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    /// Unix seconds
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub time: Option<i64>,
    /// Message text
    pub message: Option<String>,
}

/// Entry of the dialog list
#[derive(
    DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct DialogMessage {
    /// Unread messages in the dialog
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub unread_count: Option<i64>,
    /// Text of the newest message
    pub last_message: Option<String>,
    /// Unix seconds of the newest message
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub time: Option<i64>,
    /// Counterpart identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub user_id: Option<i64>,
    /// Counterpart user name
    pub username: Option<String>,
    /// Counterpart avatar URL
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub profilepicture: Option<String>,
    /// Link to the dialog
    pub link: Option<String>,
    /// Counterpart status
    pub status: Option<String>,
    /// Whether the counterpart blocked the account
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub blocked_by_user: Option<bool>,
    /// Whether messages can be sent
    #[serde(rename = "allowedDialog", deserialize_with = "lenient_bool_opt")]
    pub allowed_dialog: Option<bool>,
    /// Newest message details
    #[serde(rename = "lastMessage")]
    pub last_message_details: Option<LastMessage>,
    /// Whether there is an order in progress with the counterpart
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub has_active_order: Option<bool>,
    /// Whether the dialog is archived
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub archived: Option<bool>,
    /// Whether the dialog is starred
    #[serde(rename = "isStarred", deserialize_with = "lenient_bool_opt")]
    pub is_starred: Option<bool>,
}

impl DialogMessage {
    /// Time of the newest message
    #[must_use]
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        unix_time(self.time)
    }
}

/// Message of a conversation with one user
#[derive(
    DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct InboxMessage {
    /// Message identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub message_id: Option<i64>,
    /// Recipient identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub to_id: Option<i64>,
    /// Recipient user name
    pub to_username: Option<String>,
    /// Recipient last seen, unix seconds
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub to_live_date: Option<i64>,
    /// Sender identifier
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub from_id: Option<i64>,
    /// Sender user name
    pub from_username: Option<String>,
    /// Sender last seen, unix seconds
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub from_live_date: Option<i64>,
    /// Sender avatar URL
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub from_profilepicture: Option<String>,
    /// Message text
    pub message: Option<String>,
    /// Unix seconds
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub time: Option<i64>,
    /// Whether the message is unread
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub unread: Option<bool>,
    /// Message type
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    /// Delivery status
    pub status: Option<String>,
    /// Order created from this message
    #[serde(deserialize_with = "option_string_empty_as_none")]
    pub created_order_id: Option<String>,
    /// Whether the message was forwarded
    #[serde(deserialize_with = "lenient_bool_opt")]
    pub forwarded: Option<bool>,
    /// Last edit, unix seconds
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub updated_at: Option<i64>,
    /// Page the message belongs to
    #[serde(deserialize_with = "lenient_i64_opt")]
    pub message_page: Option<i64>,
}

impl InboxMessage {
    /// Time the message was sent
    #[must_use]
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.time)
    }
}
