//! Dynamic JSON-like tagged value tree.
//!
//! [`Value`] is the dynamic type the rest of the policy engine operates on:
//! the path resolver reads and writes into it, the expression evaluator
//! produces and consumes it, and the schema layer validates/formats it. All
//! numerics unify to [`Value::Number`] (an `f64`); integer-vs-float is only
//! recovered from schema context when formatting a response (see
//! `policy-schema`).
//!
//! # Example
//!
//! ```
//! use policy_value::Value;
//! use serde_json::json;
//!
//! let v: Value = json!({"a": [1, 2, 3]}).into();
//! assert_eq!(v.get_property("a").unwrap().as_array().unwrap().len(), 3);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod coerce;
pub mod equal;

pub use coerce::to_number;
pub use equal::deep_equal;

/// A dynamic JSON-like value.
///
/// `Object` is insertion-ordered (backed by [`IndexMap`]) because policy
/// rules that add properties via `SET`/`ADD` must format back out in a
/// stable, source-order-preserving shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a.as_slice()),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Reads a property off an `Object`, returning `Null` (never an error) if
    /// the value is not an object or the key is absent — mirrors the path
    /// resolver's "missing key reads as null" invariant for callers that want
    /// a single-segment shortcut.
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(o) => o.get(key),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            _ => write!(
                f,
                "{}",
                serde_json::to_string(self).unwrap_or_else(|_| "<unserializable>".to_string())
            ),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(a) => Value::Array(a.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(o) => {
                Value::Object(o.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::json!(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(a) => serde_json::Value::Array(a.into_iter().map(Into::into).collect()),
            Value::Object(o) => serde_json::Value::Object(
                o.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_through_serde_json() {
        // Numbers unify to `f64` internally (spec.md §3), so the byte-for-byte
        // JSON representation isn't preserved (`1` may come back as `1.0`);
        // what must hold is that re-wrapping the round-tripped JSON yields an
        // equal `Value`.
        let original = json!({"a": 1, "b": [true, null, "x"]});
        let v: Value = original.clone().into();
        let back: serde_json::Value = v.clone().into();
        let roundtripped: Value = back.into();
        assert_eq!(v, roundtripped);
    }

    #[test]
    fn get_property_on_non_object_is_none() {
        let v = Value::Number(1.0);
        assert!(v.get_property("a").is_none());
    }

    #[test]
    fn equality_is_structural() {
        let a: Value = json!({"x": 1, "y": [1, 2]}).into();
        let b: Value = json!({"x": 1, "y": [1, 2]}).into();
        assert_eq!(a, b);
    }
}
