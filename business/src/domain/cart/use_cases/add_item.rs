use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct AddItemToCartParams {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub image: String,
    pub restaurant_name: String,
    pub quantity: u32,
}

/// Rejects the whole operation when the line fails validation (empty name,
/// non-positive quantity, unparseable price) — a bad price must never reach
/// the totals.
pub trait AddItemToCartUseCase: Send + Sync {
    fn execute(&self, params: AddItemToCartParams) -> Result<Cart, CartError>;
}
