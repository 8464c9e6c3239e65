//! In-process document store.
//!
//! Mirrors the collection semantics the repository relies on: `_id` is
//! assigned on insert, `set_fields` merges top-level keys like `$set`, and
//! matched/deleted counts are 0 or 1.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::{oid::ObjectId, Document};

use crate::store::{DocumentStore, StoreError, StoreResult};

/// A thread-safe document map keyed by `_id`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    documents: Arc<DashMap<ObjectId, Document>>,
    calls: Arc<AtomicUsize>,
    closed: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations performed so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of documents currently held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn enter(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is closed".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_many(&self, limit: i64) -> StoreResult<Vec<Document>> {
        self.enter()?;
        let mut entries: Vec<(ObjectId, Document)> = self
            .documents
            .iter()
            .map(|r| (*r.key(), r.value().clone()))
            .collect();
        // ObjectIds start with a timestamp, so this approximates insertion order.
        entries.sort_by_key(|(id, _)| *id);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(entries.into_iter().take(limit).map(|(_, d)| d).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Document>> {
        self.enter()?;
        Ok(self.documents.get(&id).map(|r| r.value().clone()))
    }

    async fn insert_one(&self, mut document: Document) -> StoreResult<ObjectId> {
        self.enter()?;
        let id = ObjectId::new();
        document.insert("_id", id);
        self.documents.insert(id, document);
        Ok(id)
    }

    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<u64> {
        self.enter()?;
        match self.documents.get_mut(&id) {
            Some(mut entry) => {
                for (key, value) in fields {
                    entry.insert(key, value);
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64> {
        self.enter()?;
        Ok(u64::from(self.documents.remove(&id).is_some()))
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        self.enter()?;
        let count = self.documents.len() as u64;
        self.documents.clear();
        Ok(count)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.enter()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        tracing::info!(documents = self.documents.len(), "Memory store closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = MemoryStore::new();
        let id = store.insert_one(doc! { "name": "Hat" }).await.unwrap();

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.get_object_id("_id").unwrap(), id);
        assert_eq!(found.get_str("name").unwrap(), "Hat");
    }

    #[tokio::test]
    async fn test_set_fields_merges() {
        let store = MemoryStore::new();
        let id = store
            .insert_one(doc! { "name": "Hat", "price": 25.0 })
            .await
            .unwrap();

        let matched = store.set_fields(id, doc! { "price": 30.0 }).await.unwrap();
        assert_eq!(matched, 1);

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.get_str("name").unwrap(), "Hat");
        assert_eq!(found.get_f64("price").unwrap(), 30.0);
    }

    #[tokio::test]
    async fn test_missing_document_counts() {
        let store = MemoryStore::new();
        let id = ObjectId::new();
        assert_eq!(store.set_fields(id, doc! { "a": 1 }).await.unwrap(), 0);
        assert_eq!(store.delete_by_id(id).await.unwrap(), 0);
        assert!(store.find_by_id(id).await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_find_many_respects_limit() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.insert_one(doc! { "n": i }).await.unwrap();
        }
        assert_eq!(store.find_many(3).await.unwrap().len(), 3);
        assert_eq!(store.find_many(10).await.unwrap().len(), 5);
        assert_eq!(store.delete_all().await.unwrap(), 5);
        assert!(store.find_many(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_store_is_unavailable() {
        let store = MemoryStore::new();
        store.close().await;
        let err = store.find_many(1).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(store.call_count(), 1);
    }
}
