use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::meal::model::Meal;
use crate::domain::meal::repository::MealRepository;
use crate::domain::meal::use_cases::get_all::{ALL_MEALS_PAGE_SIZE, GetAllMealsUseCase};

pub struct GetAllMealsUseCaseImpl {
    pub repository: Arc<dyn MealRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllMealsUseCase for GetAllMealsUseCaseImpl {
    async fn execute(&self) -> Vec<Meal> {
        self.logger.info("Fetching meals across all restaurants");
        match self.repository.get_available(ALL_MEALS_PAGE_SIZE).await {
            Ok(meals) => {
                self.logger
                    .info(&format!("Found {} available meals", meals.len()));
                meals
            }
            Err(err) => {
                self.logger
                    .error(&format!("Cross-restaurant meal fetch failed: {err}"));
                Vec::new()
            }
        }
    }
}
