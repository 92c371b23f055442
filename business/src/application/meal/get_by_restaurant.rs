use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::meal::model::Meal;
use crate::domain::meal::repository::MealRepository;
use crate::domain::meal::use_cases::get_by_restaurant::GetMealsByRestaurantUseCase;

pub struct GetMealsByRestaurantUseCaseImpl {
    pub repository: Arc<dyn MealRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMealsByRestaurantUseCase for GetMealsByRestaurantUseCaseImpl {
    async fn execute(&self, restaurant_id: &str) -> Vec<Meal> {
        self.logger
            .info(&format!("Fetching menu for restaurant {restaurant_id}"));
        match self.repository.get_available_by_restaurant(restaurant_id).await {
            Ok(meals) => {
                self.logger.info(&format!(
                    "Found {} available meals for restaurant {restaurant_id}",
                    meals.len()
                ));
                meals
            }
            Err(err) => {
                self.logger.error(&format!(
                    "Menu fetch for restaurant {restaurant_id} failed: {err}"
                ));
                Vec::new()
            }
        }
    }
}
