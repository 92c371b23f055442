use super::firestore_config::FirestoreConfig;

pub struct AppConfig {
    pub firestore: FirestoreConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            firestore: FirestoreConfig::from_env()?,
        })
    }
}
