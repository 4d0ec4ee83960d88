//! Product entity rules shared by every store backend.

use std::sync::LazyLock;

use crate::schema::{FieldRule, FieldType, Schema};
use crate::types::JsonMap;

/// Entity name used in error messages.
pub const PRODUCT_ENTITY: &str = "Product";

/// Store-assigned key. Never accepted from clients.
pub const ID_FIELD: &str = "id";

static PRODUCT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(
        PRODUCT_ENTITY,
        vec![
            FieldRule::new("name", FieldType::String).required().non_empty(),
            FieldRule::new("price", FieldType::Number).required().min(0.0),
            FieldRule::new("description", FieldType::String),
            FieldRule::new("category", FieldType::String),
            FieldRule::new("inStock", FieldType::Boolean),
        ],
    )
});

/// Declared product fields. Anything else in a payload is stored verbatim.
pub fn product_schema() -> &'static Schema {
    &PRODUCT_SCHEMA
}

/// Drop keys clients may not set. Returns `true` if anything was removed.
pub fn strip_reserved_fields(fields: &mut JsonMap) -> bool {
    fields.remove(ID_FIELD).is_some()
}
