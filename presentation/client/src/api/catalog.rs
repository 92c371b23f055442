use std::sync::Arc;

use business::domain::meal::model::Meal;
use business::domain::meal::use_cases::get_all::GetAllMealsUseCase;
use business::domain::meal::use_cases::get_by_id::GetMealByIdUseCase;
use business::domain::meal::use_cases::get_by_restaurant::GetMealsByRestaurantUseCase;
use business::domain::meal::use_cases::get_top::GetTopMealsUseCase;
use business::domain::meal::use_cases::search::SearchMealsUseCase;
use business::domain::restaurant::model::Restaurant;
use business::domain::restaurant::use_cases::get_all::GetAllRestaurantsUseCase;
use business::domain::restaurant::use_cases::get_by_id::GetRestaurantByIdUseCase;

/// Catalog facade the host UI embeds. Every method degrades to an empty
/// list or `None` on fetch failure; the UI owns loading indicators and the
/// retry affordance.
pub struct CatalogClient {
    get_all_restaurants: Arc<dyn GetAllRestaurantsUseCase>,
    get_restaurant_by_id: Arc<dyn GetRestaurantByIdUseCase>,
    get_meals_by_restaurant: Arc<dyn GetMealsByRestaurantUseCase>,
    get_all_meals: Arc<dyn GetAllMealsUseCase>,
    get_top_meals: Arc<dyn GetTopMealsUseCase>,
    get_meal_by_id: Arc<dyn GetMealByIdUseCase>,
    search_meals: Arc<dyn SearchMealsUseCase>,
}

impl CatalogClient {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_all_restaurants: Arc<dyn GetAllRestaurantsUseCase>,
        get_restaurant_by_id: Arc<dyn GetRestaurantByIdUseCase>,
        get_meals_by_restaurant: Arc<dyn GetMealsByRestaurantUseCase>,
        get_all_meals: Arc<dyn GetAllMealsUseCase>,
        get_top_meals: Arc<dyn GetTopMealsUseCase>,
        get_meal_by_id: Arc<dyn GetMealByIdUseCase>,
        search_meals: Arc<dyn SearchMealsUseCase>,
    ) -> Self {
        Self {
            get_all_restaurants,
            get_restaurant_by_id,
            get_meals_by_restaurant,
            get_all_meals,
            get_top_meals,
            get_meal_by_id,
            search_meals,
        }
    }

    pub async fn all_restaurants(&self) -> Vec<Restaurant> {
        self.get_all_restaurants.execute().await
    }

    /// The home screen's "popular" rail. The historical popularity filter is
    /// gone, so this is the full listing under another name.
    pub async fn popular_restaurants(&self) -> Vec<Restaurant> {
        self.get_all_restaurants.execute().await
    }

    pub async fn restaurant(&self, id: &str) -> Option<Restaurant> {
        self.get_restaurant_by_id.execute(id).await
    }

    pub async fn meals_for(&self, restaurant_id: &str) -> Vec<Meal> {
        self.get_meals_by_restaurant.execute(restaurant_id).await
    }

    pub async fn all_meals(&self) -> Vec<Meal> {
        self.get_all_meals.execute().await
    }

    pub async fn top_meals(&self) -> Vec<Meal> {
        self.get_top_meals.execute().await
    }

    /// O(n) in the listing page size; see the use-case contract.
    pub async fn meal(&self, id: &str) -> Option<Meal> {
        self.get_meal_by_id.execute(id).await
    }

    pub async fn search(&self, term: &str) -> Vec<Meal> {
        self.search_meals.execute(term).await
    }
}
