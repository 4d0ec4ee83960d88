use std::collections::HashMap;

use async_trait::async_trait;
use catalog_core::types::JsonMap;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Document, DocumentStore, StoreResult};

type Collection = IndexMap<Uuid, JsonMap>;

/// Process-local document store.
///
/// Each operation holds the lock for its whole duration, which gives the
/// same per-document atomicity as the database backend. Contents are lost
/// when the process exits.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn insert(&self, collection: &str, fields: JsonMap) -> StoreResult<Document> {
        let id = Uuid::now_v7();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id, fields.clone());
        tracing::debug!(collection, %id, "Document inserted");
        Ok(Document { id, fields })
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let docs = collections
            .get(collection)
            .map(|c| {
                c.iter()
                    .map(|(id, fields)| Document {
                        id: *id,
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|c| c.get(&id))
            .map(|fields| Document {
                id,
                fields: fields.clone(),
            }))
    }

    async fn find_and_update_by_id(
        &self,
        collection: &str,
        id: Uuid,
        patch: JsonMap,
    ) -> StoreResult<Option<Document>> {
        let mut collections = self.collections.write().await;
        let Some(fields) = collections.get_mut(collection).and_then(|c| c.get_mut(&id)) else {
            return Ok(None);
        };
        fields.extend(patch);
        Ok(Some(Document {
            id,
            fields: fields.clone(),
        }))
    }

    async fn find_and_delete_by_id(
        &self,
        collection: &str,
        id: Uuid,
    ) -> StoreResult<Option<Document>> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .and_then(|c| c.shift_remove(&id))
            .map(|fields| Document { id, fields }))
    }
}
