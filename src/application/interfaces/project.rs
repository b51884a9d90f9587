use crate::error::AppError;
use crate::model::requests::ProjectsRequest;
use crate::presentation::project::{Category, Connects, WantWorker};
use async_trait::async_trait;

/// Interface for the project exchange
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Gets the category tree of the exchange
    async fn get_categories(&self) -> Result<Vec<Category>, AppError>;

    /// Gets the offer quota of the account
    async fn get_connects(&self) -> Result<Connects, AppError>;

    /// Searches projects
    ///
    /// When `request.page` is set only that page is returned, otherwise every
    /// page is collected.
    ///
    /// # Errors
    /// Returns [`AppError::Validation`] without any network call if no
    /// category is given
    async fn get_projects(&self, request: &ProjectsRequest) -> Result<Vec<WantWorker>, AppError>;
}
