use reqwest::{Client, StatusCode};
use tracing::debug;

use business::domain::errors::RepositoryError;

use super::document::{Document, ListDocumentsResponse, RunQueryRow};
use super::query::{RunQueryRequest, StructuredQuery};

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, thiserror::Error)]
pub enum FirestoreError {
    #[error("firestore.transport")]
    Transport(#[from] reqwest::Error),
    #[error("firestore.backend_status")]
    Backend(u16),
}

impl From<FirestoreError> for RepositoryError {
    fn from(err: FirestoreError) -> Self {
        match err {
            FirestoreError::Transport(inner) if inner.is_decode() => RepositoryError::Decode,
            FirestoreError::Transport(_) => RepositoryError::Network,
            FirestoreError::Backend(_) => RepositoryError::Backend,
        }
    }
}

/// Shared Firestore REST client. One instance is initialized at startup and
/// injected into every repository; tests substitute fakes at the repository
/// ports instead of stubbing HTTP.
pub struct FirestoreClient {
    client: Client,
    project_id: String,
    api_key: Option<String>,
    base_url: String,
}

impl FirestoreClient {
    pub fn new(project_id: String, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            project_id,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint, e.g. a local Firestore
    /// emulator.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Root resource path of the default database's documents.
    pub fn documents_root(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents",
            self.base_url, self.project_id
        )
    }

    /// Lists every document in a top-level collection. A collection that
    /// does not exist yet lists as empty.
    pub async fn list_documents(
        &self,
        collection_id: &str,
    ) -> Result<Vec<Document>, FirestoreError> {
        let url = format!("{}/{}", self.documents_root(), collection_id);
        debug!(target: "Client -- ", "GET {}", url);

        let response = self.with_key(self.client.get(&url)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FirestoreError::Backend(status.as_u16()));
        }

        let body: ListDocumentsResponse = response.json().await?;
        Ok(body.documents)
    }

    /// Point lookup by document path relative to the documents root, e.g.
    /// `restaurants/{id}`. Absence is `None`, not an error.
    pub async fn get_document(&self, path: &str) -> Result<Option<Document>, FirestoreError> {
        let url = format!("{}/{}", self.documents_root(), path);
        debug!(target: "Client -- ", "GET {}", url);

        let response = self.with_key(self.client.get(&url)).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FirestoreError::Backend(status.as_u16()));
        }

        Ok(Some(response.json().await?))
    }

    /// Runs a structured query. With `parent_path` the query is scoped to
    /// that document's nested collections; without it the query runs at the
    /// database root, which is where collection-group reads go.
    pub async fn run_query(
        &self,
        parent_path: Option<&str>,
        query: StructuredQuery,
    ) -> Result<Vec<Document>, FirestoreError> {
        let url = match parent_path {
            Some(path) => format!("{}/{}:runQuery", self.documents_root(), path),
            None => format!("{}:runQuery", self.documents_root()),
        };
        debug!(target: "Client -- ", "POST {}", url);

        let response = self
            .with_key(self.client.post(&url))
            .json(&RunQueryRequest {
                structured_query: query,
            })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FirestoreError::Backend(status.as_u16()));
        }

        let rows: Vec<RunQueryRow> = response.json().await?;
        Ok(rows.into_iter().filter_map(|row| row.document).collect())
    }

    fn with_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_documents_root_from_project_id() {
        let client = FirestoreClient::new("chow-dev".to_string(), None);

        assert_eq!(
            client.documents_root(),
            "https://firestore.googleapis.com/v1/projects/chow-dev/databases/(default)/documents"
        );
    }

    #[test]
    fn should_honor_custom_base_url() {
        let client = FirestoreClient::new("chow-dev".to_string(), None)
            .with_base_url("http://localhost:8080/v1".to_string());

        assert!(client.documents_root().starts_with("http://localhost:8080/v1/"));
    }
}
