use crate::domain::cart::model::Cart;

pub trait ClearCartUseCase: Send + Sync {
    fn execute(&self) -> Cart;
}
