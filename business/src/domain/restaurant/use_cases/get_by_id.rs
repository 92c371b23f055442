use async_trait::async_trait;

use crate::domain::restaurant::model::Restaurant;

/// Point lookup. Absence is an ordinary `None`, never an error.
#[async_trait]
pub trait GetRestaurantByIdUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Option<Restaurant>;
}
