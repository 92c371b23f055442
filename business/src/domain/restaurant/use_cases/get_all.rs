use async_trait::async_trait;

use crate::domain::restaurant::model::Restaurant;

/// Lists every restaurant in the catalog. Fetch failures degrade to an empty
/// list at this boundary; callers render a retry affordance instead of
/// handling transport errors.
#[async_trait]
pub trait GetAllRestaurantsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Restaurant>;
}
