use std::sync::Mutex;

use super::model::{Cart, CartLine};
use super::reducer::{CartAction, reduce};

/// Holds the session's cart aggregate and serializes every mutation through
/// the reducer. The source environment was single-threaded; on this runtime
/// the mutex restores the same single-writer ordering.
///
/// Every mutation synchronously returns the updated snapshot — cart state is
/// local, so there is nothing to await.
pub struct CartStore {
    state: Mutex<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Cart::empty()),
        }
    }

    pub fn add_item(&self, item: CartLine) -> Cart {
        self.dispatch(CartAction::AddItem(item))
    }

    pub fn remove_item(&self, id: &str) -> Cart {
        self.dispatch(CartAction::RemoveItem { id: id.to_string() })
    }

    pub fn update_quantity(&self, id: &str, quantity: i64) -> Cart {
        self.dispatch(CartAction::SetQuantity {
            id: id.to_string(),
            quantity,
        })
    }

    pub fn clear(&self) -> Cart {
        self.dispatch(CartAction::Clear)
    }

    /// Read-only copy of the current aggregate.
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    pub fn quantity_of(&self, id: &str) -> u32 {
        self.lock().quantity_of(id)
    }

    fn dispatch(&self, action: CartAction) -> Cart {
        let mut state = self.lock();
        *state = reduce(&state, action);
        state.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cart> {
        // A poisoned lock only means another writer panicked mid-dispatch;
        // the aggregate itself is always a complete value.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: &str, quantity: u32) -> CartLine {
        CartLine::new(
            id.to_string(),
            format!("Meal {id}"),
            price.to_string(),
            "https://example.com/meal.jpg".to_string(),
            "Mama Put".to_string(),
            quantity,
        )
        .unwrap()
    }

    #[test]
    fn should_return_updated_snapshot_from_each_operation() {
        let store = CartStore::new();

        let cart = store.add_item(line("1", "₦2,500", 1));
        assert_eq!(cart.total_amount, 2500);

        let cart = store.update_quantity("1", 3);
        assert_eq!(cart.total_item_count, 3);

        let cart = store.remove_item("1");
        assert!(cart.is_empty());
    }

    #[test]
    fn should_expose_quantity_lookup() {
        let store = CartStore::new();
        store.add_item(line("1", "₦500", 2));

        assert_eq!(store.quantity_of("1"), 2);
        assert_eq!(store.quantity_of("2"), 0);
    }

    #[test]
    fn should_reset_on_clear() {
        let store = CartStore::new();
        store.add_item(line("1", "₦500", 2));
        store.add_item(line("2", "₦800", 1));

        let cart = store.clear();

        assert_eq!(cart, Cart::empty());
        assert_eq!(store.snapshot(), Cart::empty());
    }

    #[test]
    fn should_serialize_concurrent_mutations() {
        use std::sync::Arc;

        let store = Arc::new(CartStore::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for _ in 0..50 {
                    store.add_item(line(&format!("{}", i % 2), "₦100", 1));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let cart = store.snapshot();
        assert_eq!(cart.total_item_count, 400);
        assert_eq!(cart.total_amount, 40000);
        assert_eq!(cart.lines.len(), 2);
    }
}
