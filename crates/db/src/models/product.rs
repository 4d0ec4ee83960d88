//! Product model.

use catalog_core::product::ID_FIELD;
use catalog_core::types::{JsonMap, ProductId};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::repositories::product_repo::PRODUCT_COLLECTION;
use crate::store::{Document, StoreError};

/// A product as returned to clients.
///
/// `price` keeps the exact JSON number it was stored with, so `10` is not
/// echoed back as `10.0`. Fields outside the declared schema land in
/// `attributes` and are serialized back at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Number,
    #[serde(flatten)]
    pub attributes: JsonMap,
}

impl TryFrom<Document> for Product {
    type Error = StoreError;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let Document { id, mut fields } = doc;
        fields.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        serde_json::from_value(Value::Object(fields)).map_err(|source| StoreError::Corrupt {
            collection: PRODUCT_COLLECTION,
            id,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn doc(fields: Value) -> Document {
        Document {
            id: Uuid::now_v7(),
            fields: fields.as_object().cloned().unwrap(),
        }
    }

    #[test]
    fn decodes_declared_and_extra_fields() {
        let d = doc(json!({"name": "Lamp", "price": 25, "colour": "red"}));
        let id = d.id;
        let product = Product::try_from(d).unwrap();

        assert_eq!(product.id.as_uuid(), id);
        assert_eq!(product.name, "Lamp");
        assert_eq!(product.attributes.get("colour"), Some(&json!("red")));
    }

    #[test]
    fn serializes_flat_with_exact_numbers() {
        let d = doc(json!({"name": "Lamp", "price": 10, "inStock": true}));
        let id = d.id;
        let value = serde_json::to_value(Product::try_from(d).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({"id": id.to_string(), "name": "Lamp", "price": 10, "inStock": true})
        );
    }

    #[test]
    fn missing_required_field_is_corrupt() {
        let err = Product::try_from(doc(json!({"price": 1}))).unwrap_err();
        assert_matches!(err, StoreError::Corrupt { collection: "products", .. });
    }
}
