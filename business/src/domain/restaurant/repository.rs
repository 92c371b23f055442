use async_trait::async_trait;

use super::model::Restaurant;
use crate::domain::errors::RepositoryError;

/// Read port over the remote restaurant collection. One attempt per call; no
/// retry policy lives at this level.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Restaurant>, RepositoryError>;
    async fn get_by_id(&self, id: &str) -> Result<Restaurant, RepositoryError>;
}
