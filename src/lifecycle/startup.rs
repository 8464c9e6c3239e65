//! Startup orchestration.

use std::sync::Arc;

use crate::config::{DatabaseConfig, StoreBackend};
use crate::store::{DocumentStore, MemoryStore, MongoStore, StoreError};

/// Open the configured document store.
///
/// MongoDB connections are verified with a ping so a bad connection string
/// fails here rather than on the first request.
pub async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    match config.backend {
        StoreBackend::Mongo => {
            tracing::info!(database = %config.database_name, "Connecting to MongoDB");
            let store = MongoStore::connect(config).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_memory_store() {
        let config = DatabaseConfig {
            backend: StoreBackend::Memory,
            ..Default::default()
        };
        let store = open_store(&config).await.unwrap();
        assert!(store.ping().await.is_ok());
        store.close().await;
        assert!(store.ping().await.is_err());
    }
}
