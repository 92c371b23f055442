use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartLine};
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::currency::format_amount;

pub struct AddItemToCartUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

impl AddItemToCartUseCase for AddItemToCartUseCaseImpl {
    fn execute(&self, params: AddItemToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding {} x{} to cart",
            params.name, params.quantity
        ));

        let line = CartLine::new(
            params.id,
            params.name,
            params.unit_price,
            params.image,
            params.restaurant_name,
            params.quantity,
        )
        .inspect_err(|err| {
            self.logger.warn(&format!("Rejected cart line: {err}"));
        })?;

        let cart = self.store.add_item(line);
        self.logger.info(&format!(
            "Cart now holds {} items ({})",
            cart.total_item_count,
            format_amount(cart.total_amount)
        ));
        Ok(cart)
    }
}
