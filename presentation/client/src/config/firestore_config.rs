use anyhow::Context;

/// Connection settings for the remote catalog store.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub api_key: Option<String>,
}

impl FirestoreConfig {
    /// Load Firestore configuration from environment variables
    ///
    /// Environment variables:
    /// - FIREBASE_PROJECT_ID: Firebase project to read from (required)
    /// - FIREBASE_API_KEY: API key appended to catalog requests (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let project_id =
            std::env::var("FIREBASE_PROJECT_ID").context("FIREBASE_PROJECT_ID must be set")?;
        let api_key = std::env::var("FIREBASE_API_KEY").ok();

        Ok(Self {
            project_id,
            api_key,
        })
    }
}
