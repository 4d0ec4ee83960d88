//! Domain model structs decoded from stored documents.

pub mod product;
