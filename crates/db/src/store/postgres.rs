use async_trait::async_trait;
use catalog_core::types::JsonMap;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{Document, DocumentStore, StoreResult};

/// Column list for `documents` queries.
const DOCUMENT_COLUMNS: &str = "id, body";

/// A row from the `documents` table, minus bookkeeping columns.
#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<JsonMap>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: row.id,
            fields: row.body.0,
        }
    }
}

/// Document store backed by the `documents` JSONB table.
///
/// Ordering for `find_all` comes from the `seq` column, so listing follows
/// insertion order regardless of the id scheme.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, collection: &str, fields: JsonMap) -> StoreResult<Document> {
        let query = format!(
            "INSERT INTO documents (id, collection, body) \
             VALUES ($1, $2, $3) \
             RETURNING {DOCUMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(Uuid::now_v7())
            .bind(collection)
            .bind(Json(fields))
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(collection, id = %row.id, "Document inserted");
        Ok(row.into())
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let query = format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents \
             WHERE collection = $1 \
             ORDER BY seq"
        );
        let rows = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>> {
        let query = format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents \
             WHERE collection = $1 AND id = $2"
        );
        let row = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Document::from))
    }

    async fn find_and_update_by_id(
        &self,
        collection: &str,
        id: Uuid,
        patch: JsonMap,
    ) -> StoreResult<Option<Document>> {
        // `||` on jsonb objects replaces matching top-level keys.
        let query = format!(
            "UPDATE documents SET body = body || $3, updated_at = NOW() \
             WHERE collection = $1 AND id = $2 \
             RETURNING {DOCUMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(collection)
            .bind(id)
            .bind(Json(patch))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Document::from))
    }

    async fn find_and_delete_by_id(
        &self,
        collection: &str,
        id: Uuid,
    ) -> StoreResult<Option<Document>> {
        let query = format!(
            "DELETE FROM documents \
             WHERE collection = $1 AND id = $2 \
             RETURNING {DOCUMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, DocumentRow>(&query)
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        if row.is_some() {
            tracing::debug!(collection, %id, "Document deleted");
        }
        Ok(row.map(Document::from))
    }
}
