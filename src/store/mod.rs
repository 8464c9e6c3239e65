//! Document store subsystem.
//!
//! # Data Flow
//! ```text
//! ProductRepository
//!     → DocumentStore (trait object, shared via Arc)
//!         → mongo.rs  (MongoDB collection, production)
//!         → memory.rs (DashMap, tests and local runs)
//! ```
//!
//! # Design Decisions
//! - The handle is created once at startup and injected; nothing is global
//! - Operations are single attempts; failures surface as `StoreError`
//! - Counts (matched / deleted) are returned raw; the repository decides
//!   what "not found" means

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use thiserror::Error;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Errors raised by a document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver-level failure (network, auth, server error).
    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// A stored document does not have the expected shape.
    #[error("malformed document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),

    /// The store returned an `_id` that is not an ObjectId.
    #[error("unexpected inserted id: {0}")]
    UnexpectedId(String),

    /// The store was closed or never connected.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Primitive operations over a single collection of documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return up to `limit` documents in store order.
    async fn find_many(&self, limit: i64) -> StoreResult<Vec<Document>>;

    /// Return the document with the given `_id`, if any.
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Document>>;

    /// Insert a document without `_id` and return the assigned one.
    async fn insert_one(&self, document: Document) -> StoreResult<ObjectId>;

    /// Merge `fields` into the matching document. Returns the matched count.
    async fn set_fields(&self, id: ObjectId, fields: Document) -> StoreResult<u64>;

    /// Delete the matching document. Returns the deleted count.
    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<u64>;

    /// Delete every document. Returns the deleted count.
    async fn delete_all(&self) -> StoreResult<u64>;

    /// Check the store is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Release the underlying connection.
    async fn close(&self);
}
