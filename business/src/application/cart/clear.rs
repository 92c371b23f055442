use std::sync::Arc;

use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

impl ClearCartUseCase for ClearCartUseCaseImpl {
    fn execute(&self) -> Cart {
        self.logger.info("Clearing cart");
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLine;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[test]
    fn should_reset_to_empty_aggregate() {
        let store = Arc::new(CartStore::new());
        store.add_item(
            CartLine::new(
                "1".to_string(),
                "Jollof Rice".to_string(),
                "₦2,500".to_string(),
                String::new(),
                "Mama Put".to_string(),
                3,
            )
            .unwrap(),
        );

        let use_case = ClearCartUseCaseImpl {
            store: Arc::clone(&store),
            logger: mock_logger(),
        };

        let cart = use_case.execute();

        assert_eq!(cart, Cart::empty());
        assert_eq!(store.snapshot(), Cart::empty());
    }
}
