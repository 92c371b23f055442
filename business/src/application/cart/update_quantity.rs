use std::sync::Arc;

use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    fn execute(&self, params: UpdateCartQuantityParams) -> Cart {
        self.logger.info(&format!(
            "Setting quantity of {} to {}",
            params.id, params.quantity
        ));
        self.store.update_quantity(&params.id, params.quantity)
    }
}
