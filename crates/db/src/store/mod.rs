//! Document store abstraction.
//!
//! A store keeps JSON objects in named collections and assigns each one a
//! UUID on insert. It knows nothing about entity schemas; repositories
//! validate payloads before handing them over.
//!
//! Two backends exist: [`PgDocumentStore`] (JSONB rows via sqlx) and
//! [`MemoryDocumentStore`] (process-local, used when no database is
//! configured and in tests).

mod memory;
mod postgres;

use async_trait::async_trait;
use catalog_core::schema::ValidationErrors;
use catalog_core::types::JsonMap;
use uuid::Uuid;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A stored JSON object and its store-assigned id.
///
/// The id is kept out of `fields`; callers decide how to expose it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub fields: JsonMap,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The payload was rejected by the entity schema before any write.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document no longer decodes into its entity type.
    #[error("Corrupt document {id} in '{collection}': {source}")]
    Corrupt {
        collection: &'static str,
        id: Uuid,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Single-document operations over named collections.
///
/// Each call is atomic for the document it touches. There are no
/// multi-document transactions.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Confirm the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Persist `fields` as a new document and return it with its new id.
    async fn insert(&self, collection: &str, fields: JsonMap) -> StoreResult<Document>;

    /// Every document in `collection`, in insertion order.
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>>;

    /// Overwrite the top-level keys in `patch`, leaving other keys alone.
    ///
    /// Returns the document as it is after the update, or `None` if no
    /// document has that id.
    async fn find_and_update_by_id(
        &self,
        collection: &str,
        id: Uuid,
        patch: JsonMap,
    ) -> StoreResult<Option<Document>>;

    /// Remove a document, returning it if it existed.
    async fn find_and_delete_by_id(
        &self,
        collection: &str,
        id: Uuid,
    ) -> StoreResult<Option<Document>>;
}
