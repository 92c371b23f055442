use async_trait::async_trait;

use crate::domain::meal::model::Meal;

/// One-shot search: fetches the cross-restaurant meal set and filters it
/// in memory. A UI filtering per keystroke should fetch once and reuse
/// [`crate::domain::meal::search::filter_meals`] instead of calling this
/// repeatedly.
#[async_trait]
pub trait SearchMealsUseCase: Send + Sync {
    async fn execute(&self, term: &str) -> Vec<Meal>;
}
