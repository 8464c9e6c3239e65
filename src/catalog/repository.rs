//! Product persistence over a `DocumentStore`.
//!
//! # Responsibilities
//! - List, fetch, insert, partially update and delete product documents
//! - Build filters and `$set` bodies (via the mapper)
//! - Distinguish "no such product" from store failure
//!
//! # Design Decisions
//! - Inserts and updates re-read the document so the response reflects what
//!   the store actually persisted
//! - Updates are last-write-wins; there is no version field to guard
//!   concurrent writers

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::id::ProductId;
use crate::catalog::mapper::{decode_product, insert_document, set_document};
use crate::catalog::model::{NewProduct, Product, ProductPatch};
use crate::store::{DocumentStore, StoreError};

/// Maximum number of products returned by `list_all`.
pub const LIST_LIMIT: i64 = 100;

/// Errors returned by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<mongodb::bson::de::Error> for RepositoryError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        RepositoryError::Store(StoreError::Decode(err))
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for the product collection.
#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Up to `LIST_LIMIT` products in store order.
    pub async fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let documents = self.store.find_many(LIST_LIMIT).await?;
        documents
            .into_iter()
            .map(|d| decode_product(d).map_err(RepositoryError::from))
            .collect()
    }

    pub async fn get_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        match self.store.find_by_id(id.as_object_id()).await? {
            Some(document) => Ok(Some(decode_product(document)?)),
            None => Ok(None),
        }
    }

    /// Insert a validated product and return it as stored.
    pub async fn insert(&self, product: &NewProduct) -> RepositoryResult<Product> {
        let oid = self.store.insert_one(insert_document(product)).await?;
        let id = ProductId::from(oid);
        tracing::debug!(id = %id, "Product inserted");

        // Re-read so defaults applied by the store are reflected.
        self.get_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }

    /// Apply a partial update and return the current document.
    ///
    /// An empty patch performs no write but still requires the product to
    /// exist.
    pub async fn update_by_id(&self, id: ProductId, patch: &ProductPatch) -> RepositoryResult<Product> {
        if !patch.is_empty() {
            let matched = self
                .store
                .set_fields(id.as_object_id(), set_document(patch))
                .await?;
            if matched == 0 {
                return Err(RepositoryError::NotFound(id));
            }
            tracing::debug!(id = %id, "Product updated");
        }

        self.get_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }

    pub async fn delete_by_id(&self, id: ProductId) -> RepositoryResult<()> {
        let deleted = self.store.delete_by_id(id.as_object_id()).await?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        tracing::debug!(id = %id, "Product deleted");
        Ok(())
    }

    /// Remove every product. Used by the seeding tool.
    pub async fn clear(&self) -> RepositoryResult<u64> {
        Ok(self.store.delete_all().await?)
    }
}
