use crate::error::AppError;
use crate::presentation::dialog::{DialogMessage, InboxMessage};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the message service
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Gets every dialog of the account
    ///
    /// The dialog list does not report a page count, so pages are read one
    /// by one until an empty page.
    async fn get_all_dialogs(&self) -> Result<Vec<DialogMessage>, AppError>;

    /// Gets the full conversation with a user
    ///
    /// # Arguments
    /// * `username` - User name of the counterpart
    async fn get_dialog_with_user(&self, username: &str) -> Result<Vec<InboxMessage>, AppError>;

    /// Sends a message to a user
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] without any network call if `user_id`
    /// is zero or `text` is blank
    async fn send_message(&self, user_id: u64, text: &str) -> Result<Value, AppError>;

    /// Deletes a message
    async fn delete_message(&self, message_id: u64) -> Result<Value, AppError>;

    /// Shows the typing indicator to a user
    async fn set_typing(&self, recipient_id: u64) -> Result<Value, AppError>;
}
