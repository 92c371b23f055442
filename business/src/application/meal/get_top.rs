use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::meal::model::Meal;
use crate::domain::meal::repository::MealRepository;
use crate::domain::meal::use_cases::get_top::{GetTopMealsUseCase, TOP_MEALS_PAGE_SIZE};

pub struct GetTopMealsUseCaseImpl {
    pub repository: Arc<dyn MealRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTopMealsUseCase for GetTopMealsUseCaseImpl {
    async fn execute(&self) -> Vec<Meal> {
        self.logger.info("Fetching top rated meals");
        match self.repository.get_available(TOP_MEALS_PAGE_SIZE).await {
            Ok(meals) => meals,
            Err(err) => {
                self.logger
                    .error(&format!("Top meals fetch failed: {err}"));
                Vec::new()
            }
        }
    }
}
