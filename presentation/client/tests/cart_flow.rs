use std::sync::Arc;

use business::application::cart::add_item::AddItemToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::remove_item::RemoveItemFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::domain::cart::errors::CartError;
use business::domain::cart::store::CartStore;
use business::domain::cart::use_cases::add_item::AddItemToCartParams;
use business::domain::logger::Logger;
use business::domain::meal::model::Meal;

use client::CartClient;

struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

fn cart_client() -> CartClient {
    let logger: Arc<dyn Logger> = Arc::new(NullLogger);
    let store = Arc::new(CartStore::new());

    CartClient::new(
        Arc::new(AddItemToCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        }),
        Arc::new(RemoveItemFromCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        }),
        Arc::new(UpdateCartQuantityUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        }),
        Arc::new(ClearCartUseCaseImpl {
            store: store.clone(),
            logger,
        }),
        store,
    )
}

fn params(id: &str, price: &str, quantity: u32) -> AddItemToCartParams {
    AddItemToCartParams {
        id: id.to_string(),
        name: format!("Meal {id}"),
        unit_price: price.to_string(),
        image: "https://example.com/meal.jpg".to_string(),
        restaurant_name: "Mama Put".to_string(),
        quantity,
    }
}

#[test]
fn checkout_scenario_keeps_totals_consistent() {
    let client = cart_client();

    let cart = client.add_item(params("1", "₦2,500", 1)).unwrap();
    assert_eq!(cart.total_item_count, 1);

    let cart = client.add_item(params("2", "₦1,000", 2)).unwrap();
    assert_eq!(cart.total_item_count, 3);
    assert_eq!(cart.total_amount, 4500);

    let cart = client.update_quantity("1", 3);
    assert_eq!(cart.total_item_count, 5);
    assert_eq!(cart.total_amount, 9500);

    let cart = client.remove_item("2");
    assert_eq!(cart.total_item_count, 3);
    assert_eq!(cart.total_amount, 7500);

    assert_eq!(client.quantity_of("1"), 3);
    assert_eq!(client.quantity_of("2"), 0);
}

#[test]
fn repeated_adds_merge_into_one_line() {
    let client = cart_client();

    client.add_item(params("1", "₦1,000", 1)).unwrap();
    let cart = client.add_item(params("1", "₦1,000", 2)).unwrap();

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 3);
}

#[test]
fn non_positive_quantity_removes_the_line() {
    let client = cart_client();

    client.add_item(params("1", "₦1,000", 2)).unwrap();
    assert!(client.update_quantity("1", 0).is_empty());

    client.add_item(params("1", "₦1,000", 2)).unwrap();
    assert!(client.update_quantity("1", -5).is_empty());
}

#[test]
fn bad_price_rejects_the_add_and_leaves_cart_untouched() {
    let client = cart_client();

    client.add_item(params("1", "₦1,000", 1)).unwrap();
    let result = client.add_item(params("2", "priceless", 1));

    assert!(matches!(result, Err(CartError::PriceUnparseable(_))));
    let cart = client.cart();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.total_amount, 1000);
}

#[test]
fn adding_a_catalog_meal_formats_its_price_for_display() {
    let client = cart_client();
    let meal = Meal {
        id: "m1".to_string(),
        name: "Jollof Rice".to_string(),
        description: String::new(),
        price: 2500,
        image: "https://cdn.example.com/jollof.jpg".to_string(),
        restaurant_id: "r1".to_string(),
        restaurant_name: "Mama Put".to_string(),
        category: "Rice".to_string(),
        is_available: true,
        preparation_time: 15,
        rating: Some(4.8),
        reviews: Some(120),
    };

    let cart = client.add_meal(&meal, 2).unwrap();

    assert_eq!(cart.lines[0].unit_price, "₦2,500");
    assert_eq!(cart.lines[0].restaurant_name, "Mama Put");
    assert_eq!(cart.total_amount, 5000);
}

#[test]
fn clear_resets_the_session_cart() {
    let client = cart_client();

    client.add_item(params("1", "₦2,500", 2)).unwrap();
    client.add_item(params("2", "₦800", 1)).unwrap();

    let cart = client.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total_item_count, 0);
    assert_eq!(cart.total_amount, 0);
    assert!(client.cart().is_empty());
}
