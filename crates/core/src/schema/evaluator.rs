//! Schema evaluator -- pure logic, no store access.

use serde_json::Value;

use super::rules::{FieldRule, FieldViolation, Schema, ValidationMode, ValidationResult};
use crate::types::JsonMap;

/// Check `data` against every declared field of `schema`.
///
/// Violations are reported in schema declaration order, at most one per
/// field. Undeclared fields follow, and are only checked for NUL characters,
/// which JSONB storage cannot hold.
pub fn validate(schema: &Schema, data: &JsonMap, mode: ValidationMode) -> ValidationResult {
    let mut errors: Vec<FieldViolation> = schema
        .fields
        .iter()
        .filter_map(|rule| check_field(rule, data.get(rule.name), mode))
        .collect();

    errors.extend(
        data.iter()
            .filter(|(key, _)| !schema.fields.iter().any(|rule| rule.name == key.as_str()))
            .filter(|(key, value)| key.contains('\0') || contains_nul(value))
            .map(|(key, _)| nul_violation(key)),
    );

    ValidationResult {
        entity: schema.entity,
        errors,
    }
}

fn check_field(rule: &FieldRule, value: Option<&Value>, mode: ValidationMode) -> Option<FieldViolation> {
    let value = match (value, mode) {
        (None, ValidationMode::Update) => return None,
        (None | Some(Value::Null), _) if rule.required => {
            return Some(violation(rule, format!("{} is required", rule.name)));
        }
        (None | Some(Value::Null), _) => return None,
        (Some(v), _) => v,
    };

    if !rule.field_type.matches(value) {
        return Some(violation(
            rule,
            format!("{} must be {}", rule.name, rule.field_type),
        ));
    }

    if contains_nul(value) {
        return Some(nul_violation(rule.name));
    }

    if rule.non_empty {
        if let Some(s) = value.as_str() {
            if s.trim().is_empty() {
                return Some(violation(rule, format!("{} must not be empty", rule.name)));
            }
        }
    }

    if let (Some(min), Some(n)) = (rule.min, value.as_f64()) {
        if n < min {
            return Some(violation(
                rule,
                format!("{} must be at least {min}", rule.name),
            ));
        }
    }

    None
}

/// True if any string or object key inside `value` holds a `\0`.
fn contains_nul(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains('\0'),
        Value::Array(items) => items.iter().any(contains_nul),
        Value::Object(map) => map
            .iter()
            .any(|(key, v)| key.contains('\0') || contains_nul(v)),
        _ => false,
    }
}

fn nul_violation(field: &str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        message: format!("{field} must not contain NUL characters"),
    }
}

fn violation(rule: &FieldRule, message: String) -> FieldViolation {
    FieldViolation {
        field: rule.name.to_string(),
        message,
    }
}
