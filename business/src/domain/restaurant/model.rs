use serde::{Deserialize, Serialize};

/// Canonical restaurant entity: the normalized, fully-typed shape the app
/// works with, as opposed to the raw heterogeneous store record. Read-only on
/// the client; never mutated locally, only refetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image: String,
    pub cover_image: Option<String>,
    pub logo: Option<String>,
    pub rating: f64,
    pub reviews: i64,
    pub delivery_time: String,
    pub description: String,
    pub is_open: bool,
    pub category: String,
    pub address: Option<String>,
}
