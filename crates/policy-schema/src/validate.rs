//! **Validate(value, schema) → (ok, errors[])** — structural walk, spec.md
//! §4.4. Every violation is recorded and the walk continues into siblings,
//! so a caller sees every problem in one pass rather than just the first.

use crate::error::ValidationError;
use crate::schema::{Schema, SchemaType};
use policy_value::Value;

/// Validates `value` against `schema`, returning every violation found.
/// An empty vector means the document is valid.
pub fn validate(value: &Value, schema: &Schema) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    walk(value, schema, "$", &mut errors);
    errors
}

fn walk(value: &Value, schema: &Schema, path: &str, errors: &mut Vec<ValidationError>) {
    let Some(kind) = schema.kind else {
        return;
    };

    if !kind_matches(value, kind) {
        errors.push(ValidationError::new(
            path,
            format!("expected {}, got {}", kind.as_str(), value.kind()),
        ));
        return;
    }

    match (kind, value) {
        (SchemaType::Object, Value::Object(map)) => {
            for required in &schema.required {
                if !map.contains_key(required) {
                    errors.push(ValidationError::new(
                        path,
                        format!("missing required property '{required}'"),
                    ));
                }
            }
            for (key, child_schema) in &schema.properties {
                if let Some(child_value) = map.get(key) {
                    walk(
                        child_value,
                        child_schema,
                        &format!("{path}.{key}"),
                        errors,
                    );
                }
            }
            if !schema.additional_properties {
                for key in map.keys() {
                    if !schema.properties.contains_key(key) {
                        errors.push(ValidationError::new(
                            path,
                            format!("unexpected additional property '{key}'"),
                        ));
                    }
                }
            }
        }
        (SchemaType::Array, Value::Array(items)) => {
            if let Some(item_schema) = &schema.items {
                for (i, item) in items.iter().enumerate() {
                    walk(item, item_schema, &format!("{path}[{i}]"), errors);
                }
            }
        }
        (SchemaType::Number | SchemaType::Integer, Value::Number(n)) => {
            validate_number(*n, schema, path, errors);
        }
        (SchemaType::String, Value::String(s)) => {
            validate_string(s, schema, path, errors);
        }
        _ => {}
    }
}

fn validate_number(n: f64, schema: &Schema, path: &str, errors: &mut Vec<ValidationError>) {
    if let Some(min) = schema.minimum {
        if n < min {
            errors.push(ValidationError::new(path, format!("{n} is below minimum {min}")));
        }
    }
    if let Some(max) = schema.maximum {
        if n > max {
            errors.push(ValidationError::new(path, format!("{n} is above maximum {max}")));
        }
    }
    if let Some(step) = schema.multiple_of {
        if step != 0.0 && (n / step).fract().abs() > f64::EPSILON {
            errors.push(ValidationError::new(
                path,
                format!("{n} is not a multiple of {step}"),
            ));
        }
    }
}

fn validate_string(s: &str, schema: &Schema, path: &str, errors: &mut Vec<ValidationError>) {
    if let Some(min) = schema.min_length {
        if s.chars().count() < min {
            errors.push(ValidationError::new(path, format!("shorter than minLength {min}")));
        }
    }
    if let Some(max) = schema.max_length {
        if s.chars().count() > max {
            errors.push(ValidationError::new(path, format!("longer than maxLength {max}")));
        }
    }
    if let Some(pattern) = &schema.pattern {
        match regex::Regex::new(pattern) {
            Ok(re) if !re.is_match(s) => {
                errors.push(ValidationError::new(path, format!("does not match pattern '{pattern}'")));
            }
            Err(e) => errors.push(ValidationError::new(path, format!("invalid pattern '{pattern}': {e}"))),
            _ => {}
        }
    }
    if !schema.enum_values.is_empty() {
        let s_value = Value::String(s.to_string());
        if !schema.enum_values.iter().any(|v| *v == s_value) {
            errors.push(ValidationError::new(path, format!("'{s}' is not one of the enumerated values")));
        }
    }
}

/// A `Number` is acceptable where `integer` is declared iff its value is
/// integral (spec.md §4.4's stated relaxation).
fn kind_matches(value: &Value, kind: SchemaType) -> bool {
    match (kind, value) {
        (SchemaType::Object, Value::Object(_)) => true,
        (SchemaType::Array, Value::Array(_)) => true,
        (SchemaType::String, Value::String(_)) => true,
        (SchemaType::Number, Value::Number(_)) => true,
        (SchemaType::Integer, Value::Number(n)) => n.fract() == 0.0,
        (SchemaType::Boolean, Value::Bool(_)) => true,
        (SchemaType::Null, Value::Null) => true,
        _ => false,
    }
}
