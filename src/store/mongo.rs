//! MongoDB-backed document store.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use crate::config::DatabaseConfig;
use crate::store::{DocumentStore, StoreError, StoreResult};

/// Store over one MongoDB collection.
///
/// `Client` is internally reference counted; clones share the same pool.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Connect and verify the deployment answers a ping.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.connection_string).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        options.server_selection_timeout = Some(Duration::from_secs(config.connect_timeout_secs));

        let client = Client::with_options(options)?;
        let database = client.database(&config.database_name);
        let collection = database.collection::<Document>(&config.collection);

        let store = Self {
            client,
            database,
            collection,
        };
        store.ping().await?;

        tracing::info!(
            database = %config.database_name,
            collection = %config.collection,
            "Connected to MongoDB"
        );
        Ok(store)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_many(&self, limit: i64) -> StoreResult<Vec<Document>> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn insert_one(&self, document: Document) -> StoreResult<ObjectId> {
        let result = self.collection.insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<u64> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn close(&self) {
        tracing::info!("Closing MongoDB connection");
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}
