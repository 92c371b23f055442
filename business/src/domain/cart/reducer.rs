use super::model::{Cart, CartLine};

/// State transitions over the cart aggregate.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merge semantics: an existing line with the same id gains the incoming
    /// quantity; otherwise the line is appended in arrival order.
    AddItem(CartLine),
    /// Deletes the line if present; a no-op otherwise.
    RemoveItem { id: String },
    /// Replaces the line's quantity. Zero or negative removes the line.
    SetQuantity { id: String, quantity: i64 },
    Clear,
}

/// Pure transition function: same state and action always produce the same
/// aggregate. Totals are rebuilt from the lines on every transition rather
/// than adjusted incrementally.
pub fn reduce(state: &Cart, action: CartAction) -> Cart {
    match action {
        CartAction::AddItem(item) => {
            let mut lines = state.lines.clone();
            match lines.iter_mut().find(|line| line.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => lines.push(item),
            }
            Cart::from_lines(lines)
        }
        CartAction::RemoveItem { id } => {
            let mut lines = state.lines.clone();
            lines.retain(|line| line.id != id);
            Cart::from_lines(lines)
        }
        CartAction::SetQuantity { id, quantity } => {
            if quantity <= 0 {
                return reduce(state, CartAction::RemoveItem { id });
            }
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            let mut lines = state.lines.clone();
            if let Some(existing) = lines.iter_mut().find(|line| line.id == id) {
                existing.quantity = quantity;
            }
            Cart::from_lines(lines)
        }
        CartAction::Clear => Cart::empty(),
    }
}
