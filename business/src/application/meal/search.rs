use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::meal::model::Meal;
use crate::domain::meal::repository::MealRepository;
use crate::domain::meal::search::filter_meals;
use crate::domain::meal::use_cases::get_all::ALL_MEALS_PAGE_SIZE;
use crate::domain::meal::use_cases::search::SearchMealsUseCase;

pub struct SearchMealsUseCaseImpl {
    pub repository: Arc<dyn MealRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchMealsUseCase for SearchMealsUseCaseImpl {
    async fn execute(&self, term: &str) -> Vec<Meal> {
        self.logger.info(&format!("Searching meals for \"{term}\""));
        match self.repository.get_available(ALL_MEALS_PAGE_SIZE).await {
            Ok(meals) => {
                let matches = filter_meals(&meals, term);
                self.logger.info(&format!(
                    "Search \"{term}\" matched {} of {} meals",
                    matches.len(),
                    meals.len()
                ));
                matches
            }
            Err(err) => {
                self.logger
                    .error(&format!("Meal search \"{term}\" failed: {err}"));
                Vec::new()
            }
        }
    }
}
