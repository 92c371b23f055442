use async_trait::async_trait;

use super::model::Meal;
use crate::domain::errors::RepositoryError;

/// Read port over the per-restaurant menu collections.
///
/// The store exposes no cross-collection point lookup, so there is no
/// `get_by_id` here; callers needing one scan the capped cross-collection
/// result set instead.
#[async_trait]
pub trait MealRepository: Send + Sync {
    /// Available meals of one restaurant, name ascending.
    async fn get_available_by_restaurant(
        &self,
        restaurant_id: &str,
    ) -> Result<Vec<Meal>, RepositoryError>;

    /// Available meals across every restaurant's menu collection in one
    /// collection-group read, rating descending, capped at `limit`.
    async fn get_available(&self, limit: u32) -> Result<Vec<Meal>, RepositoryError>;
}
