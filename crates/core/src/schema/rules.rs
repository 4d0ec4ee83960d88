//! Schema descriptor and validation result types.

use std::fmt;

use serde::Serialize;

/// JSON type a declared field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Any,
}

impl FieldType {
    pub fn matches(self, value: &serde_json::Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Array => value.is_array(),
            FieldType::Object => value.is_object(),
            FieldType::Any => true,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldType::String => "a string",
            FieldType::Number => "a number",
            FieldType::Boolean => "a boolean",
            FieldType::Array => "an array",
            FieldType::Object => "an object",
            FieldType::Any => "any value",
        })
    }
}

/// Constraints on a single declared field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRule {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    /// Inclusive lower bound, only checked for numbers.
    pub min: Option<f64>,
    /// Reject strings that are empty after trimming.
    pub non_empty: bool,
}

impl FieldRule {
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
            min: None,
            non_empty: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }
}

/// Field rules for one entity. Undeclared fields are accepted as-is.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    pub entity: &'static str,
    pub fields: Vec<FieldRule>,
}

impl Schema {
    pub fn new(entity: &'static str, fields: Vec<FieldRule>) -> Self {
        Self { entity, fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Which checks apply to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// A new record: required fields must be present.
    Create,
    /// A partial patch: only the fields present are checked.
    Update,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Outcome of checking one payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub entity: &'static str,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationErrors {
                entity: self.entity,
                errors: self.errors,
            })
        }
    }
}

/// A rejected payload, displayed as
/// `"<Entity> validation failed: field: message, field: message"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    pub entity: &'static str,
    pub errors: Vec<FieldViolation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.entity)?;
        for (i, v) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
