use async_trait::async_trait;

use crate::domain::meal::model::Meal;

/// Page size of the top-rated meal listing.
pub const TOP_MEALS_PAGE_SIZE: u32 = 10;

/// The highest-rated available meals across every restaurant, capped at
/// [`TOP_MEALS_PAGE_SIZE`].
#[async_trait]
pub trait GetTopMealsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Meal>;
}
