use crate::domain::cart::model::Cart;

pub struct UpdateCartQuantityParams {
    pub id: String,
    /// Zero or negative removes the line entirely.
    pub quantity: i64,
}

pub trait UpdateCartQuantityUseCase: Send + Sync {
    fn execute(&self, params: UpdateCartQuantityParams) -> Cart;
}
