use async_trait::async_trait;
use serde_json::json;

use business::domain::errors::RepositoryError;
use business::domain::meal::mapper::MealMapper;
use business::domain::meal::model::Meal;
use business::domain::meal::repository::MealRepository;

use crate::client::FirestoreClient;
use crate::document::Document;
use crate::query::StructuredQuery;
use crate::value::Value;

const RESTAURANTS: &str = "restaurants";
const MENUS: &str = "menus";
const FIELD_AVAILABLE: &str = "available";
const FIELD_NAME: &str = "name";
const FIELD_RATING: &str = "rating";
const FIELD_RESTAURANT_ID: &str = "restaurantId";

pub struct MealRepositoryFirestore {
    client: FirestoreClient,
    mapper: MealMapper,
}

impl MealRepositoryFirestore {
    pub fn new(client: FirestoreClient, mapper: MealMapper) -> Self {
        Self { client, mapper }
    }

    /// Maps a menu document, backfilling the owning restaurant id from the
    /// document path when the record itself does not carry one.
    fn map_document(&self, document: Document) -> Meal {
        let id = document.doc_id().to_string();
        let restaurant_id = document.parent_id(RESTAURANTS).map(str::to_string);

        let mut record = document.into_record();
        if !record.contains_key(FIELD_RESTAURANT_ID)
            && let Some(restaurant_id) = restaurant_id
        {
            record.insert(FIELD_RESTAURANT_ID.to_string(), json!(restaurant_id));
        }

        self.mapper.map(&id, &record)
    }
}

#[async_trait]
impl MealRepository for MealRepositoryFirestore {
    async fn get_available_by_restaurant(
        &self,
        restaurant_id: &str,
    ) -> Result<Vec<Meal>, RepositoryError> {
        let query = StructuredQuery::collection(MENUS)
            .where_eq(FIELD_AVAILABLE, Value::Boolean(true))
            .order_by_asc(FIELD_NAME);

        let documents = self
            .client
            .run_query(Some(&format!("{RESTAURANTS}/{restaurant_id}")), query)
            .await?;

        Ok(documents
            .into_iter()
            .map(|document| self.map_document(document))
            .collect())
    }

    async fn get_available(&self, limit: u32) -> Result<Vec<Meal>, RepositoryError> {
        let query = StructuredQuery::collection_group(MENUS)
            .where_eq(FIELD_AVAILABLE, Value::Boolean(true))
            .order_by_desc(FIELD_RATING)
            .with_limit(limit);

        let documents = self.client.run_query(None, query).await?;

        Ok(documents
            .into_iter()
            .map(|document| self.map_document(document))
            .collect())
    }
}
