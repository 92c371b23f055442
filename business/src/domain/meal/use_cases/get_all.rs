use async_trait::async_trait;

use crate::domain::meal::model::Meal;

/// Page size of the cross-restaurant meal listing.
pub const ALL_MEALS_PAGE_SIZE: u32 = 20;

/// Available meals across every restaurant, rating descending, capped at
/// [`ALL_MEALS_PAGE_SIZE`].
#[async_trait]
pub trait GetAllMealsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Meal>;
}
