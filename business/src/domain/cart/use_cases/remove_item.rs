use crate::domain::cart::model::Cart;

pub struct RemoveItemFromCartParams {
    pub id: String,
}

/// Removing an id that has no line is a no-op, not an error.
pub trait RemoveItemFromCartUseCase: Send + Sync {
    fn execute(&self, params: RemoveItemFromCartParams) -> Cart;
}
