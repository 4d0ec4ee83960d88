//! Domain building blocks for the product catalog: error taxonomy, id type,
//! and the schema descriptor used to validate product payloads before they
//! reach a document store. Nothing in this crate performs I/O.

pub mod error;
pub mod product;
pub mod schema;
pub mod types;
