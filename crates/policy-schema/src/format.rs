//! **Format(value, schema) → value** — spec.md §4.4. Same walk as
//! `validate`, but coercive: each leaf is nudged to the declared type where
//! the conversion is unambiguous, rather than rejected.

use crate::error::SchemaError;
use crate::schema::{Schema, SchemaType};
use indexmap::IndexMap;
use policy_value::{to_number, Value};

/// Formats `value` against `schema`, coercing leaves to their declared
/// type. Properties absent from `schema.properties` are kept iff
/// `additionalProperties` is `true` (the default), dropped otherwise.
pub fn format(value: &Value, schema: &Schema) -> Result<Value, SchemaError> {
    let Some(kind) = schema.kind else {
        return Ok(value.clone());
    };

    match kind {
        SchemaType::Object => format_object(value, schema),
        SchemaType::Array => format_array(value, schema),
        SchemaType::Number => format_number(value).map(Value::Number),
        SchemaType::Integer => format_number(value).map(|n| Value::Number(n.round())),
        SchemaType::Boolean => format_bool(value).map(Value::Bool),
        SchemaType::String => Ok(Value::String(format_string(value))),
        SchemaType::Null => Ok(Value::Null),
    }
}

fn format_object(value: &Value, schema: &Schema) -> Result<Value, SchemaError> {
    let map = match value.as_object() {
        Some(m) => m,
        None => return Err(SchemaError::Uncoercible(String::new(), value.kind(), "object")),
    };

    let mut out = IndexMap::new();
    for (key, child_schema) in &schema.properties {
        if let Some(child_value) = map.get(key) {
            out.insert(key.clone(), format(child_value, child_schema)?);
        }
    }
    if schema.additional_properties {
        for (key, v) in map {
            if !schema.properties.contains_key(key) {
                out.insert(key.clone(), v.clone());
            }
        }
    }
    Ok(Value::Object(out))
}

fn format_array(value: &Value, schema: &Schema) -> Result<Value, SchemaError> {
    let items = match value.as_array() {
        Some(items) => items,
        None => return Err(SchemaError::Uncoercible(String::new(), value.kind(), "array")),
    };

    let out = match &schema.items {
        Some(item_schema) => items
            .iter()
            .map(|item| format(item, item_schema))
            .collect::<Result<Vec<_>, _>>()?,
        None => items.clone(),
    };
    Ok(Value::Array(out))
}

fn format_number(value: &Value) -> Result<f64, SchemaError> {
    to_number(value).ok_or_else(|| SchemaError::Uncoercible(String::new(), value.kind(), "number"))
}

fn format_bool(value: &Value) -> Result<bool, SchemaError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        other => Err(SchemaError::Uncoercible(String::new(), other.kind(), "boolean")),
    }
}

fn format_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
