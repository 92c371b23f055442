use std::sync::Arc;

use super::model::Restaurant;
use super::services::ReviewCountSampler;
use crate::domain::shared::record::{RawRecord, bool_field, f64_field, i64_field, str_field};

const FALLBACK_LOCATION: &str = "Lagos, Nigeria";
const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=800";
const FALLBACK_DELIVERY_TIME: &str = "20-30 mins";
const FALLBACK_DESCRIPTION: &str = "Tasty meals, prepared fresh and delivered hot.";
const FALLBACK_CATEGORY: &str = "Restaurant";
const FALLBACK_RATING: f64 = 4.5;

/// Normalizes raw restaurant records into the canonical entity, overlaying
/// documented fallbacks for absent fields. Total: any record with an id maps.
pub struct RestaurantMapper {
    reviews: Arc<dyn ReviewCountSampler>,
}

impl RestaurantMapper {
    pub fn new(reviews: Arc<dyn ReviewCountSampler>) -> Self {
        Self { reviews }
    }

    pub fn map(&self, id: &str, record: &RawRecord) -> Restaurant {
        let address = str_field(record, "address");

        Restaurant {
            id: id.to_string(),
            name: str_field(record, "name").unwrap_or_default(),
            location: str_field(record, "location")
                .or_else(|| address.clone())
                .unwrap_or_else(|| FALLBACK_LOCATION.to_string()),
            image: str_field(record, "image")
                .or_else(|| str_field(record, "coverImage"))
                .unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
            cover_image: str_field(record, "coverImage"),
            logo: str_field(record, "logo"),
            rating: f64_field(record, "rating").unwrap_or(FALLBACK_RATING),
            reviews: i64_field(record, "reviews").unwrap_or_else(|| self.reviews.sample()),
            delivery_time: str_field(record, "deliveryTime")
                .unwrap_or_else(|| FALLBACK_DELIVERY_TIME.to_string()),
            description: str_field(record, "description")
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            // Absent means open; an explicit false must survive the overlay.
            is_open: bool_field(record, "isOpen").unwrap_or(true),
            category: str_field(record, "category")
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            address,
        }
    }
}
