//! Response bodies for the product endpoints.

use catalog_db::models::product::Product;
use serde::Serialize;

/// `{ "message": ... }`, used for confirmations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body of `201 Created` from `POST /products`.
#[derive(Debug, Serialize)]
pub struct ProductCreated {
    pub message: &'static str,
    pub product: Product,
}

/// Body of `200 OK` from `PUT /products/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdated {
    pub message: &'static str,
    pub updated_product: Product,
}
