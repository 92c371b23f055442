use serde::{Deserialize, Serialize};

/// Canonical meal entity. Raw records name availability and prep time
/// differently (`available`, `prepTime`); the mapper reconciles both onto
/// this shape and the accessors keep the raw naming reachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Empty string allowed; absent descriptions normalize to empty.
    pub description: String,
    pub price: i64,
    pub image: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub category: String,
    pub is_available: bool,
    pub preparation_time: i64,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
}

impl Meal {
    /// Raw-schema name for [`Meal::is_available`].
    pub fn available(&self) -> bool {
        self.is_available
    }

    /// Raw-schema name for [`Meal::preparation_time`].
    pub fn prep_time(&self) -> i64 {
        self.preparation_time
    }

    /// Case-insensitive substring match over the searchable fields: name,
    /// category, restaurant name and description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
            || self.restaurant_name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}
