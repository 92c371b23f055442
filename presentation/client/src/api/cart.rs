use std::sync::Arc;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::store::CartStore;
use business::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::remove_item::{
    RemoveItemFromCartParams, RemoveItemFromCartUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::meal::model::Meal;
use business::domain::shared::currency::format_amount;

/// Cart facade the host UI embeds. All operations are synchronous and return
/// the updated aggregate snapshot; the session's cart lives for as long as
/// this client does.
pub struct CartClient {
    add_item: Arc<dyn AddItemToCartUseCase>,
    remove_item: Arc<dyn RemoveItemFromCartUseCase>,
    update_quantity: Arc<dyn UpdateCartQuantityUseCase>,
    clear: Arc<dyn ClearCartUseCase>,
    store: Arc<CartStore>,
}

impl CartClient {
    pub fn new(
        add_item: Arc<dyn AddItemToCartUseCase>,
        remove_item: Arc<dyn RemoveItemFromCartUseCase>,
        update_quantity: Arc<dyn UpdateCartQuantityUseCase>,
        clear: Arc<dyn ClearCartUseCase>,
        store: Arc<CartStore>,
    ) -> Self {
        Self {
            add_item,
            remove_item,
            update_quantity,
            clear,
            store,
        }
    }

    pub fn add_item(&self, params: AddItemToCartParams) -> Result<Cart, CartError> {
        self.add_item.execute(params)
    }

    /// Adds a canonical catalog meal to the cart, formatting its integer
    /// price into the display shape the cart carries.
    pub fn add_meal(&self, meal: &Meal, quantity: u32) -> Result<Cart, CartError> {
        self.add_item.execute(AddItemToCartParams {
            id: meal.id.clone(),
            name: meal.name.clone(),
            unit_price: format_amount(meal.price),
            image: meal.image.clone(),
            restaurant_name: meal.restaurant_name.clone(),
            quantity,
        })
    }

    pub fn remove_item(&self, id: &str) -> Cart {
        self.remove_item
            .execute(RemoveItemFromCartParams { id: id.to_string() })
    }

    pub fn update_quantity(&self, id: &str, quantity: i64) -> Cart {
        self.update_quantity.execute(UpdateCartQuantityParams {
            id: id.to_string(),
            quantity,
        })
    }

    pub fn clear(&self) -> Cart {
        self.clear.execute()
    }

    /// Read-only snapshot of the current aggregate.
    pub fn cart(&self) -> Cart {
        self.store.snapshot()
    }

    pub fn quantity_of(&self, id: &str) -> u32 {
        self.store.quantity_of(id)
    }
}
