use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::restaurant::model::Restaurant;
use crate::domain::restaurant::repository::RestaurantRepository;
use crate::domain::restaurant::use_cases::get_by_id::GetRestaurantByIdUseCase;

pub struct GetRestaurantByIdUseCaseImpl {
    pub repository: Arc<dyn RestaurantRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRestaurantByIdUseCase for GetRestaurantByIdUseCaseImpl {
    async fn execute(&self, id: &str) -> Option<Restaurant> {
        self.logger.info(&format!("Fetching restaurant {id}"));
        match self.repository.get_by_id(id).await {
            Ok(restaurant) => Some(restaurant),
            Err(RepositoryError::NotFound) => {
                self.logger.info(&format!("Restaurant {id} not found"));
                None
            }
            Err(err) => {
                self.logger
                    .error(&format!("Restaurant {id} fetch failed: {err}"));
                None
            }
        }
    }
}
