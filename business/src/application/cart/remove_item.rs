use std::sync::Arc;

use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::remove_item::{
    RemoveItemFromCartParams, RemoveItemFromCartUseCase,
};
use crate::domain::logger::Logger;

pub struct RemoveItemFromCartUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveItemFromCartUseCase for RemoveItemFromCartUseCaseImpl {
    fn execute(&self, params: RemoveItemFromCartParams) -> Cart {
        self.logger
            .info(&format!("Removing {} from cart", params.id));
        self.store.remove_item(&params.id)
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

    fn line(id: &str) -> CartLine {
        CartLine::new(
            id.to_string(),
            format!("Meal {id}"),
            "₦1,000".to_string(),
            String::new(),
            "Mama Put".to_string(),
            1,
        )
        .unwrap()
    }

    #[test]
    fn should_remove_existing_line() {
        let store = Arc::new(CartStore::new());
        store.add_item(line("1"));

        let use_case = RemoveItemFromCartUseCaseImpl {
            store: Arc::clone(&store),
            logger: mock_logger(),
        };

        let cart = use_case.execute(RemoveItemFromCartParams { id: "1".to_string() });

        assert!(cart.is_empty());
    }

    #[test]
    fn should_be_a_no_op_for_absent_id() {
        let store = Arc::new(CartStore::new());
        store.add_item(line("1"));

        let use_case = RemoveItemFromCartUseCaseImpl {
            store: Arc::clone(&store),
            logger: mock_logger(),
        };

        let cart = use_case.execute(RemoveItemFromCartParams { id: "9".to_string() });

        assert_eq!(cart.lines.len(), 1);
    }
}
