use crate::domain::shared::currency::CurrencyError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart.name_empty")]
    NameEmpty,
    #[error("cart.quantity_not_positive")]
    QuantityNotPositive,
    #[error("cart.price_unparseable")]
    PriceUnparseable(#[from] CurrencyError),
}
