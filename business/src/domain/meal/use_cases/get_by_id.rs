use async_trait::async_trait;

use crate::domain::meal::model::Meal;

/// Point lookup by meal id.
///
/// The store cannot look a document up by id across nested menu collections,
/// so implementations fetch the capped cross-restaurant set and scan it.
/// O(n) in the page size; callers must not assume constant-cost lookup.
#[async_trait]
pub trait GetMealByIdUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Option<Meal>;
}
