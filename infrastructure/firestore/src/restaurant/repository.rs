use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::restaurant::mapper::RestaurantMapper;
use business::domain::restaurant::model::Restaurant;
use business::domain::restaurant::repository::RestaurantRepository;

use crate::client::FirestoreClient;

const RESTAURANTS: &str = "restaurants";

pub struct RestaurantRepositoryFirestore {
    client: FirestoreClient,
    mapper: RestaurantMapper,
}

impl RestaurantRepositoryFirestore {
    pub fn new(client: FirestoreClient, mapper: RestaurantMapper) -> Self {
        Self { client, mapper }
    }

    fn map_document(&self, document: crate::document::Document) -> Restaurant {
        let id = document.doc_id().to_string();
        let record = document.into_record();
        self.mapper.map(&id, &record)
    }
}

#[async_trait]
impl RestaurantRepository for RestaurantRepositoryFirestore {
    async fn get_all(&self) -> Result<Vec<Restaurant>, RepositoryError> {
        let documents = self.client.list_documents(RESTAURANTS).await?;

        Ok(documents
            .into_iter()
            .map(|document| self.map_document(document))
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Restaurant, RepositoryError> {
        let document = self
            .client
            .get_document(&format!("{RESTAURANTS}/{id}"))
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(self.map_document(document))
    }
}
