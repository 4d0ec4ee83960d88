//! Schema descriptors and validation for free-form JSON documents.
//!
//! A [`Schema`] lists the declared fields of one entity with their type and
//! constraints. The evaluator checks a payload against it without touching
//! any store, so validation can be exercised on its own.

pub mod evaluator;
pub mod rules;

pub use evaluator::validate;
pub use rules::{
    FieldRule, FieldType, FieldViolation, Schema, ValidationErrors, ValidationMode,
    ValidationResult,
};
