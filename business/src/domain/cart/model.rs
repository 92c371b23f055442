use serde::{Deserialize, Serialize};

use super::errors::CartError;
use crate::domain::meal::model::Meal;
use crate::domain::shared::currency::{format_amount, parse_amount};

/// One distinct product in the cart. Unique by `id` within a cart; repeated
/// adds merge into `quantity` instead of producing duplicate lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    /// Display price exactly as shown in the UI, e.g. `"₦2,500"`.
    pub unit_price: String,
    /// Integer amount parsed from `unit_price` at construction.
    pub unit_amount: i64,
    pub image: String,
    pub restaurant_name: String,
    pub quantity: u32,
}

impl CartLine {
    /// Validates and builds a line. An unparseable display price rejects the
    /// line here, so totals can never absorb a garbage amount.
    pub fn new(
        id: String,
        name: String,
        unit_price: String,
        image: String,
        restaurant_name: String,
        quantity: u32,
    ) -> Result<Self, CartError> {
        if name.trim().is_empty() {
            return Err(CartError::NameEmpty);
        }
        if quantity == 0 {
            return Err(CartError::QuantityNotPositive);
        }

        let unit_amount = parse_amount(&unit_price)?;

        Ok(Self {
            id,
            name,
            unit_price,
            unit_amount,
            image,
            restaurant_name,
            quantity,
        })
    }

    /// Builds a line from a canonical catalog meal, formatting its integer
    /// price into the display shape the cart carries.
    pub fn from_meal(meal: &Meal, quantity: u32) -> Result<Self, CartError> {
        Self::new(
            meal.id.clone(),
            meal.name.clone(),
            format_amount(meal.price),
            meal.image.clone(),
            meal.restaurant_name.clone(),
            quantity,
        )
    }

    pub fn line_total(&self) -> i64 {
        self.unit_amount * i64::from(self.quantity)
    }
}

/// The complete in-memory cart state, one consistency unit: lines in
/// insertion order plus totals derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub total_item_count: u32,
    pub total_amount: i64,
}

impl Cart {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total_item_count: 0,
            total_amount: 0,
        }
    }

    /// Rebuilds the aggregate from a set of lines, recomputing both totals
    /// from scratch. Every state transition goes through here so the totals
    /// cannot drift from the lines.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let total_item_count = lines.iter().map(|line| line.quantity).sum();
        let total_amount = lines.iter().map(CartLine::line_total).sum();

        Self {
            lines,
            total_item_count,
            total_amount,
        }
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Quantity of the given product currently in the cart; zero when the
    /// product has no line. Linear scan, fine at cart sizes.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty()
    }
}
