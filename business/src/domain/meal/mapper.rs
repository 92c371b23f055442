use super::model::Meal;
use crate::domain::shared::record::{RawRecord, bool_field, f64_field, i64_field, str_field};

const FALLBACK_RESTAURANT_NAME: &str = "Unknown Restaurant";

/// Normalizes raw menu records into the canonical meal entity, bridging the
/// raw `available`/`prepTime` names onto `is_available`/`preparation_time`.
/// Total: any record with an id maps.
pub struct MealMapper;

impl MealMapper {
    pub fn map(&self, id: &str, record: &RawRecord) -> Meal {
        Meal {
            id: id.to_string(),
            name: str_field(record, "name").unwrap_or_default(),
            description: str_field(record, "description").unwrap_or_default(),
            price: i64_field(record, "price").unwrap_or(0),
            image: str_field(record, "image").unwrap_or_default(),
            restaurant_id: str_field(record, "restaurantId").unwrap_or_default(),
            restaurant_name: str_field(record, "restaurantName")
                .unwrap_or_else(|| FALLBACK_RESTAURANT_NAME.to_string()),
            category: str_field(record, "category").unwrap_or_default(),
            is_available: bool_field(record, "available").unwrap_or(false),
            preparation_time: i64_field(record, "prepTime").unwrap_or(0),
            rating: f64_field(record, "rating"),
            reviews: i64_field(record, "reviews"),
        }
    }
}
