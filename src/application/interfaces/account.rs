use crate::error::AppError;
use crate::presentation::account::{Actor, User};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the signed in account
    async fn get_me(&self) -> Result<Actor, AppError>;

    /// Gets the public profile of a user
    async fn get_user(&self, user_id: u64) -> Result<User, AppError>;

    /// Marks the account as offline
    async fn set_offline(&self) -> Result<Value, AppError>;

    /// Marks the account as online
    async fn set_online(&self) -> Result<Value, AppError>;

    /// Gets the orders the account works on as a seller
    async fn get_worker_orders(&self) -> Result<Value, AppError>;

    /// Gets the orders the account placed as a buyer
    async fn get_payer_orders(&self) -> Result<Value, AppError>;

    /// Gets the notification feed
    async fn get_notifications(&self) -> Result<Value, AppError>;

    /// Gets the name of the realtime channel of the account
    async fn get_channel(&self) -> Result<String, AppError>;
}
