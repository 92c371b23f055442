use async_trait::async_trait;

use crate::domain::meal::model::Meal;

/// Available meals on one restaurant's menu, name ascending.
#[async_trait]
pub trait GetMealsByRestaurantUseCase: Send + Sync {
    async fn execute(&self, restaurant_id: &str) -> Vec<Meal>;
}
