use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::meal::model::Meal;
use crate::domain::meal::repository::MealRepository;
use crate::domain::meal::use_cases::get_all::ALL_MEALS_PAGE_SIZE;
use crate::domain::meal::use_cases::get_by_id::GetMealByIdUseCase;

pub struct GetMealByIdUseCaseImpl {
    pub repository: Arc<dyn MealRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMealByIdUseCase for GetMealByIdUseCaseImpl {
    async fn execute(&self, id: &str) -> Option<Meal> {
        self.logger.info(&format!("Looking up meal {id}"));
        // No cross-collection point lookup in the store: fetch the capped
        // cross-restaurant set and scan it for the id.
        match self.repository.get_available(ALL_MEALS_PAGE_SIZE).await {
            Ok(meals) => {
                let found = meals.into_iter().find(|meal| meal.id == id);
                if found.is_none() {
                    self.logger.info(&format!("Meal {id} not found"));
                }
                found
            }
            Err(err) => {
                self.logger
                    .error(&format!("Meal {id} lookup failed: {err}"));
                None
            }
        }
    }
}
