//! Repository for the `products` collection.
//!
//! Every write is checked against the product schema first, so a store
//! never sees a payload the schema would reject.

use catalog_core::product::{product_schema, strip_reserved_fields};
use catalog_core::schema::{validate, ValidationMode};
use catalog_core::types::{JsonMap, ProductId};

use crate::models::product::Product;
use crate::store::{DocumentStore, StoreResult};

/// Collection name shared by every backend.
pub const PRODUCT_COLLECTION: &str = "products";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Validate and insert a new product. Any client-supplied `id` is dropped.
    pub async fn create(store: &dyn DocumentStore, mut fields: JsonMap) -> StoreResult<Product> {
        strip_reserved_fields(&mut fields);
        validate(product_schema(), &fields, ValidationMode::Create).into_result()?;

        let doc = store.insert(PRODUCT_COLLECTION, fields).await?;
        Product::try_from(doc)
    }

    /// List all products in store order.
    pub async fn list(store: &dyn DocumentStore) -> StoreResult<Vec<Product>> {
        store
            .find_all(PRODUCT_COLLECTION)
            .await?
            .into_iter()
            .map(Product::try_from)
            .collect()
    }

    /// Find a product by its ID.
    pub async fn find_by_id(store: &dyn DocumentStore, id: ProductId) -> StoreResult<Option<Product>> {
        store
            .find_by_id(PRODUCT_COLLECTION, id.as_uuid())
            .await?
            .map(Product::try_from)
            .transpose()
    }

    /// Apply a partial update. Only the fields present in `fields` are
    /// validated and replaced.
    ///
    /// Returns `None` if no product with the given ID exists.
    pub async fn update(
        store: &dyn DocumentStore,
        id: ProductId,
        mut fields: JsonMap,
    ) -> StoreResult<Option<Product>> {
        strip_reserved_fields(&mut fields);
        validate(product_schema(), &fields, ValidationMode::Update).into_result()?;

        store
            .find_and_update_by_id(PRODUCT_COLLECTION, id.as_uuid(), fields)
            .await?
            .map(Product::try_from)
            .transpose()
    }

    /// Delete a product. Returns `true` if a row was removed.
    pub async fn delete(store: &dyn DocumentStore, id: ProductId) -> StoreResult<bool> {
        let removed = store
            .find_and_delete_by_id(PRODUCT_COLLECTION, id.as_uuid())
            .await?;
        Ok(removed.is_some())
    }
}
