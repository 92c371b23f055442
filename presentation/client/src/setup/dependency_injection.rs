use std::sync::Arc;

use logger::TracingLogger;

use firestore::client::FirestoreClient;
use firestore::meal::repository::MealRepositoryFirestore;
use firestore::restaurant::repository::RestaurantRepositoryFirestore;

use business::application::cart::add_item::AddItemToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::remove_item::RemoveItemFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::meal::get_all::GetAllMealsUseCaseImpl;
use business::application::meal::get_by_id::GetMealByIdUseCaseImpl;
use business::application::meal::get_by_restaurant::GetMealsByRestaurantUseCaseImpl;
use business::application::meal::get_top::GetTopMealsUseCaseImpl;
use business::application::meal::search::SearchMealsUseCaseImpl;
use business::application::restaurant::get_all::GetAllRestaurantsUseCaseImpl;
use business::application::restaurant::get_by_id::GetRestaurantByIdUseCaseImpl;
use business::domain::cart::store::CartStore;
use business::domain::meal::mapper::MealMapper;
use business::domain::restaurant::mapper::RestaurantMapper;
use business::domain::restaurant::services::UniformReviewCounts;

use crate::api::cart::CartClient;
use crate::api::catalog::CatalogClient;
use crate::config::app_config::AppConfig;

/// Process-wide object graph: built once at startup and kept for the whole
/// session. Repositories get their own store handles here; tests build the
/// facades over fake repositories instead.
pub struct DependencyContainer {
    pub catalog: CatalogClient,
    pub cart: CartClient,
}

impl DependencyContainer {
    pub fn new(config: AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let restaurant_store = FirestoreClient::new(
            config.firestore.project_id.clone(),
            config.firestore.api_key.clone(),
        );
        let meal_store = FirestoreClient::new(
            config.firestore.project_id,
            config.firestore.api_key,
        );

        let restaurant_mapper = RestaurantMapper::new(Arc::new(UniformReviewCounts));
        let restaurant_repository = Arc::new(RestaurantRepositoryFirestore::new(
            restaurant_store,
            restaurant_mapper,
        ));
        let meal_repository = Arc::new(MealRepositoryFirestore::new(meal_store, MealMapper));

        // Catalog use cases
        let get_all_restaurants = Arc::new(GetAllRestaurantsUseCaseImpl {
            repository: restaurant_repository.clone(),
            logger: logger.clone(),
        });
        let get_restaurant_by_id = Arc::new(GetRestaurantByIdUseCaseImpl {
            repository: restaurant_repository,
            logger: logger.clone(),
        });
        let get_meals_by_restaurant = Arc::new(GetMealsByRestaurantUseCaseImpl {
            repository: meal_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_meals = Arc::new(GetAllMealsUseCaseImpl {
            repository: meal_repository.clone(),
            logger: logger.clone(),
        });
        let get_top_meals = Arc::new(GetTopMealsUseCaseImpl {
            repository: meal_repository.clone(),
            logger: logger.clone(),
        });
        let get_meal_by_id = Arc::new(GetMealByIdUseCaseImpl {
            repository: meal_repository.clone(),
            logger: logger.clone(),
        });
        let search_meals = Arc::new(SearchMealsUseCaseImpl {
            repository: meal_repository,
            logger: logger.clone(),
        });

        // Cart use cases over the session store
        let cart_store = Arc::new(CartStore::new());
        let add_item = Arc::new(AddItemToCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let remove_item = Arc::new(RemoveItemFromCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let update_quantity = Arc::new(UpdateCartQuantityUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let clear = Arc::new(ClearCartUseCaseImpl {
            store: cart_store.clone(),
            logger,
        });

        let catalog = CatalogClient::new(
            get_all_restaurants,
            get_restaurant_by_id,
            get_meals_by_restaurant,
            get_all_meals,
            get_top_meals,
            get_meal_by_id,
            search_meals,
        );

        let cart = CartClient::new(add_item, remove_item, update_quantity, clear, cart_store);

        Self { catalog, cart }
    }
}
