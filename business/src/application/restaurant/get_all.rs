use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::restaurant::model::Restaurant;
use crate::domain::restaurant::repository::RestaurantRepository;
use crate::domain::restaurant::use_cases::get_all::GetAllRestaurantsUseCase;

pub struct GetAllRestaurantsUseCaseImpl {
    pub repository: Arc<dyn RestaurantRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllRestaurantsUseCase for GetAllRestaurantsUseCaseImpl {
    async fn execute(&self) -> Vec<Restaurant> {
        self.logger.info("Fetching all restaurants");
        match self.repository.get_all().await {
            Ok(restaurants) => {
                self.logger
                    .info(&format!("Found {} restaurants", restaurants.len()));
                restaurants
            }
            Err(err) => {
                self.logger
                    .error(&format!("Restaurant listing failed: {err}"));
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub RestaurantRepo {}

        #[async_trait]
        impl RestaurantRepository for RestaurantRepo {
            async fn get_all(&self) -> Result<Vec<Restaurant>, RepositoryError>;
            async fn get_by_id(&self, id: &str) -> Result<Restaurant, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn restaurant(id: &str, name: &str) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: name.to_string(),
            location: "Lagos, Nigeria".to_string(),
            image: String::new(),
            cover_image: None,
            logo: None,
            rating: 4.5,
            reviews: 30,
            delivery_time: "20-30 mins".to_string(),
            description: String::new(),
            is_open: true,
            category: "Restaurant".to_string(),
            address: None,
        }
    }

    #[tokio::test]
    async fn should_return_all_restaurants() {
        let mut mock_repo = MockRestaurantRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![restaurant("r1", "Mama Put"), restaurant("r2", "The Place")]));

        let use_case = GetAllRestaurantsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let restaurants = use_case.execute().await;

        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[0].name, "Mama Put");
    }

    #[tokio::test]
    async fn should_degrade_to_empty_list_on_repository_error() {
        let mut mock_repo = MockRestaurantRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::Network));

        let use_case = GetAllRestaurantsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.is_empty());
    }
}
